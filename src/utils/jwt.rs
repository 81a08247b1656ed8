//! Token issuance and verification.
//!
//! Two token classes are signed with two independent secrets: access tokens
//! carry no `type` claim, refresh tokens carry `type = "refresh"`. Verification
//! checks signature, issuer, audience, and expiry; refresh verification
//! additionally requires the discriminator. Reusing one secret for both
//! classes would let a refresh token pass access verification, so the config
//! keeps them separate.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use jsonwebtoken::errors::ErrorKind;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::users::model::UserRole;
use crate::utils::errors::AppError;

pub const JWT_ISSUER: &str = "MindSpace";
pub const JWT_AUDIENCE: &str = "MindSpace-Users";

/// Identity claims embedded in every issued token. Immutable once signed;
/// the role is a snapshot taken at issuance, not a live lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "userName")]
    pub user_name: String,
    pub email: String,
    pub role: UserRole,
    /// `"refresh"` on refresh tokens, absent on access tokens.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    pub iss: String,
    pub aud: String,
    pub exp: usize,
    pub iat: usize,
}

pub fn create_access_token(
    user_id: Uuid,
    user_name: &str,
    email: &str,
    role: UserRole,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;

    let claims = Claims {
        user_id: user_id.to_string(),
        user_name: user_name.to_string(),
        email: email.to_string(),
        role,
        token_type: None,
        iss: JWT_ISSUER.to_string(),
        aud: JWT_AUDIENCE.to_string(),
        exp: now + jwt_config.access_token_expiry as usize,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.access_secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to sign access token: {e}")))
}

pub fn create_refresh_token(
    user_id: Uuid,
    user_name: &str,
    email: &str,
    role: UserRole,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;

    let claims = Claims {
        user_id: user_id.to_string(),
        user_name: user_name.to_string(),
        email: email.to_string(),
        role,
        token_type: Some("refresh".to_string()),
        iss: JWT_ISSUER.to_string(),
        aud: JWT_AUDIENCE.to_string(),
        exp: now + jwt_config.refresh_token_expiry as usize,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.refresh_secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to sign refresh token: {e}")))
}

pub fn verify_access_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.access_secret.as_bytes()),
        &validation(),
    )
    .map(|data| data.claims)
    .map_err(map_jwt_error)
}

pub fn verify_refresh_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.refresh_secret.as_bytes()),
        &validation(),
    )
    .map(|data| data.claims)
    .map_err(map_jwt_error)?;

    if claims.token_type.as_deref() != Some("refresh") {
        return Err(AppError::TokenInvalid);
    }

    Ok(claims)
}

/// Parse an `Authorization` header value formatted exactly as `Bearer <token>`.
pub fn extract_bearer_token(header: Option<&str>) -> Result<&str, AppError> {
    let header = header.ok_or(AppError::MissingAuthHeader)?;

    let mut parts = header.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) => Ok(token),
        _ => Err(AppError::MalformedAuthHeader),
    }
}

fn validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[JWT_ISSUER]);
    validation.set_audience(&[JWT_AUDIENCE]);
    // No clock leeway so expiry behavior is deterministic.
    validation.leeway = 0;
    validation
}

fn map_jwt_error(err: jsonwebtoken::errors::Error) -> AppError {
    match err.kind() {
        ErrorKind::ExpiredSignature => AppError::TokenExpired,
        _ => AppError::TokenInvalid,
    }
}
