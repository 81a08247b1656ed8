use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error as ThisError;

/// Closed set of failure kinds surfaced by the service.
///
/// Every operation returns one of these kinds rather than an opaque message,
/// and the status mapping in [`IntoResponse`] is the single place where kinds
/// become HTTP codes. Nothing dispatches on message text.
#[derive(Debug, ThisError)]
pub enum AppError {
    /// No `Authorization` header on a protected route.
    #[error("Authorization header missing")]
    MissingAuthHeader,

    /// `Authorization` header present but not `Bearer <token>`.
    #[error("Authorization header format should be: Bearer <token>")]
    MalformedAuthHeader,

    /// Signature was valid but `exp` is in the past.
    #[error("Token has expired")]
    TokenExpired,

    /// Bad signature, wrong issuer/audience, malformed payload, or a token
    /// of the wrong class (access where refresh is expected, or vice versa).
    #[error("Invalid token")]
    TokenInvalid,

    /// The token verified but its subject no longer exists in the store.
    #[error("User no longer exists")]
    IdentityNotFound,

    /// Login failed. Unknown username and wrong password are deliberately
    /// indistinguishable to the caller.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Authenticated but lacking the required role or ownership.
    #[error("{0}")]
    Forbidden(String),

    /// Registration conflict on username or email uniqueness.
    #[error("User already exists with this email or username")]
    DuplicateCredential,

    /// Request payload failed schema validation; carries per-field details.
    #[error("Validation error")]
    Validation(Vec<String>),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Internal(#[from] Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingAuthHeader
            | AppError::MalformedAuthHeader
            | AppError::TokenExpired
            | AppError::TokenInvalid
            | AppError::IdentityNotFound
            | AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::DuplicateCredential => StatusCode::CONFLICT,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "internal error");
        }

        let body = match &self {
            AppError::Validation(details) => Json(json!({
                "success": false,
                "message": self.to_string(),
                "details": details,
            })),
            _ => Json(json!({
                "success": false,
                "message": self.to_string(),
            })),
        };

        (status, body).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            // Postgres unique_violation
            if db_err.code().as_deref() == Some("23505") {
                return AppError::DuplicateCredential;
            }
        }
        AppError::Internal(err.into())
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(err: bcrypt::BcryptError) -> Self {
        AppError::Internal(err.into())
    }
}
