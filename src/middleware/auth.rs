use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use uuid::Uuid;

use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::{extract_bearer_token, verify_access_token};

/// Identity resolved for the current request. Populated from the verified
/// token's claims, so the role is the snapshot taken at issuance.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub user_name: String,
    pub email: String,
    pub role: UserRole,
}

/// Extractor that authenticates the request: bearer extraction, access-token
/// verification, then an existence check against the user store so a deleted
/// account cannot keep using a still-valid token.
///
/// Handlers take this exactly once; the role gates in
/// [`crate::middleware::role`] only read the resolved [`CurrentUser`] and
/// never re-run verification.
#[derive(Debug, Clone)]
pub struct AuthUser(pub CurrentUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .map(|value| value.to_str().map_err(|_| AppError::MalformedAuthHeader))
            .transpose()?;

        let token = extract_bearer_token(auth_header)?;
        let claims = verify_access_token(token, &state.jwt_config)?;

        let user_id = Uuid::parse_str(&claims.user_id).map_err(|_| AppError::TokenInvalid)?;

        state
            .user_store
            .find_by_id(user_id)
            .await?
            .ok_or(AppError::IdentityNotFound)?;

        Ok(AuthUser(CurrentUser {
            id: user_id,
            user_name: claims.user_name,
            email: claims.email,
            role: claims.role,
        }))
    }
}
