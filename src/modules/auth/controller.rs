use axum::{Json, extract::State, http::StatusCode};

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::ApiResponse;
use crate::validator::ValidatedJson;

use super::model::{
    AuthResponse, ExternalLoginRequest, LoginRequest, RefreshTokenRequest, RegisterRequest,
    TokenPair,
};
use super::service::AuthService;

pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AuthResponse>>), AppError> {
    let data =
        AuthService::register_user(state.user_store.as_ref(), &state.jwt_config, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("User registered successfully", data)),
    ))
}

pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, AppError> {
    let data = AuthService::login_user(state.user_store.as_ref(), &state.jwt_config, dto).await?;
    Ok(Json(ApiResponse::ok("Login successful", data)))
}

pub async fn refresh_token(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RefreshTokenRequest>,
) -> Result<Json<ApiResponse<TokenPair>>, AppError> {
    let data =
        AuthService::refresh_tokens(state.user_store.as_ref(), &state.jwt_config, dto).await?;
    Ok(Json(ApiResponse::ok("Tokens refreshed successfully", data)))
}

pub async fn external_login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<ExternalLoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, AppError> {
    let data =
        AuthService::external_login(state.user_store.as_ref(), &state.jwt_config, dto).await?;
    Ok(Json(ApiResponse::ok("Login successful", data)))
}
