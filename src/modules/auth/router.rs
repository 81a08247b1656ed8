use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{external_login, login_user, refresh_token, register_user};

/// Public routes: no authentication required.
pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_user))
        .route("/login", post(login_user))
        .route("/refresh-token", post(refresh_token))
        .route("/external-login", post(external_login))
}
