use rand::Rng;
use rand::distributions::Alphanumeric;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::users::model::{DEFAULT_EMOJI, DEFAULT_MOOD, UserRecord, UserRole};
use crate::store::{NewUser, UserStore};
use crate::utils::errors::AppError;
use crate::utils::jwt::{create_access_token, create_refresh_token, verify_refresh_token};
use crate::utils::password::hash_password;

use super::model::{
    AuthResponse, ExternalLoginRequest, LoginRequest, RefreshTokenRequest, RegisterRequest,
    TokenPair,
};

pub struct AuthService;

impl AuthService {
    #[instrument(skip_all, fields(user_name = %dto.user_name))]
    pub async fn register_user(
        store: &dyn UserStore,
        jwt_config: &JwtConfig,
        dto: RegisterRequest,
    ) -> Result<AuthResponse, AppError> {
        let hashed = hash_password(&dto.password)?;

        let record = store
            .create(NewUser {
                user_name: dto.user_name,
                full_name: dto.full_name,
                email: dto.email.to_lowercase(),
                password: hashed,
                current_mood: dto.current_mood.unwrap_or(DEFAULT_MOOD),
                emoji: dto.emoji.unwrap_or_else(|| DEFAULT_EMOJI.to_string()),
                role: dto.role.unwrap_or(UserRole::User),
            })
            .await?;

        info!(user_id = %record.id, "user registered");

        let tokens = Self::issue_tokens(&record, jwt_config)?;
        Ok(AuthResponse {
            user: record.into(),
            tokens,
        })
    }

    #[instrument(skip_all, fields(user_name = %dto.user_name))]
    pub async fn login_user(
        store: &dyn UserStore,
        jwt_config: &JwtConfig,
        dto: LoginRequest,
    ) -> Result<AuthResponse, AppError> {
        let record = store
            .find_by_user_name(&dto.user_name)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !record.verify_password(&dto.password)? {
            return Err(AppError::InvalidCredentials);
        }

        store.touch_last_seen(record.id).await?;

        info!(user_id = %record.id, "login successful");

        let tokens = Self::issue_tokens(&record, jwt_config)?;
        Ok(AuthResponse {
            user: record.into(),
            tokens,
        })
    }

    /// Exchanges a refresh token for a fresh access/refresh pair. Stateless
    /// rotation: nothing is recorded and the old token stays valid until its
    /// natural expiry.
    #[instrument(skip_all)]
    pub async fn refresh_tokens(
        store: &dyn UserStore,
        jwt_config: &JwtConfig,
        dto: RefreshTokenRequest,
    ) -> Result<TokenPair, AppError> {
        let claims = verify_refresh_token(&dto.refresh_token, jwt_config)?;

        let user_id = Uuid::parse_str(&claims.user_id).map_err(|_| AppError::TokenInvalid)?;

        let record = store
            .find_by_id(user_id)
            .await?
            .ok_or(AppError::IdentityNotFound)?;

        Self::issue_tokens(&record, jwt_config)
    }

    /// Single mapped external-identity path: the caller presents a profile
    /// already verified by the provider, and we log in by email or create a
    /// fresh account with generated credentials.
    #[instrument(skip_all)]
    pub async fn external_login(
        store: &dyn UserStore,
        jwt_config: &JwtConfig,
        dto: ExternalLoginRequest,
    ) -> Result<AuthResponse, AppError> {
        let email = dto.email.to_lowercase();

        if let Some(record) = store.find_by_email(&email).await? {
            store.touch_last_seen(record.id).await?;
            let tokens = Self::issue_tokens(&record, jwt_config)?;
            return Ok(AuthResponse {
                user: record.into(),
                tokens,
            });
        }

        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(6)
            .map(char::from)
            .collect();
        let base = dto
            .full_name
            .as_deref()
            .and_then(|name| name.split_whitespace().next())
            .unwrap_or("user");
        let user_name = format!("{}{}", base.to_lowercase(), suffix.to_lowercase());

        // The account is only ever entered through the external provider, so
        // the local password is random and never disclosed.
        let password: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(16)
            .map(char::from)
            .collect();

        let record = store
            .create(NewUser {
                full_name: dto.full_name.unwrap_or_else(|| user_name.clone()),
                user_name,
                email,
                password: hash_password(&password)?,
                current_mood: DEFAULT_MOOD,
                emoji: DEFAULT_EMOJI.to_string(),
                role: UserRole::User,
            })
            .await?;

        info!(user_id = %record.id, "external identity mapped to new account");

        let tokens = Self::issue_tokens(&record, jwt_config)?;
        Ok(AuthResponse {
            user: record.into(),
            tokens,
        })
    }

    fn issue_tokens(record: &UserRecord, jwt_config: &JwtConfig) -> Result<TokenPair, AppError> {
        Ok(TokenPair {
            access_token: create_access_token(
                record.id,
                &record.user_name,
                &record.email,
                record.role,
                jwt_config,
            )?,
            refresh_token: create_refresh_token(
                record.id,
                &record.user_name,
                &record.email,
                record.role,
                jwt_config,
            )?,
        })
    }
}
