use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::{require_admin, require_mentor_or_admin, require_ownership_or_admin};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::ApiResponse;
use crate::validator::ValidatedJson;

use super::model::{AdminStatus, MentorStatus, UpdateUserRequest, User};
use super::service::UserService;

pub async fn get_user(
    State(state): State<AppState>,
    AuthUser(current): AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<Json<ApiResponse<User>>, AppError> {
    require_ownership_or_admin(&current, user_id)?;

    let user = UserService::get_user(state.user_store.as_ref(), user_id).await?;
    Ok(Json(ApiResponse::ok("User retrieved successfully", user)))
}

pub async fn update_user(
    State(state): State<AppState>,
    AuthUser(current): AuthUser,
    Path(user_id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<ApiResponse<User>>, AppError> {
    require_ownership_or_admin(&current, user_id)?;

    let user = UserService::update_user(state.user_store.as_ref(), user_id, dto).await?;
    Ok(Json(ApiResponse::ok("User updated successfully", user)))
}

pub async fn delete_user(
    State(state): State<AppState>,
    AuthUser(current): AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    require_ownership_or_admin(&current, user_id)?;

    UserService::delete_user(state.user_store.as_ref(), user_id).await?;
    Ok(Json(ApiResponse::message("User deleted successfully")))
}

pub async fn check_user_admin(
    State(state): State<AppState>,
    AuthUser(current): AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<Json<ApiResponse<AdminStatus>>, AppError> {
    require_admin(&current)?;

    let is_admin = UserService::is_admin(state.user_store.as_ref(), user_id).await?;
    Ok(Json(ApiResponse::ok(
        "Admin status retrieved successfully",
        AdminStatus { is_admin },
    )))
}

pub async fn check_user_mentor(
    State(state): State<AppState>,
    AuthUser(current): AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<Json<ApiResponse<MentorStatus>>, AppError> {
    require_mentor_or_admin(&current)?;

    let is_mentor = UserService::is_mentor(state.user_store.as_ref(), user_id).await?;
    Ok(Json(ApiResponse::ok(
        "Mentor status retrieved successfully",
        MentorStatus { is_mentor },
    )))
}
