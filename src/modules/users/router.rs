use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{check_user_admin, check_user_mentor, delete_user, get_user, update_user};

/// Protected routes: every handler authenticates via the `AuthUser`
/// extractor and applies its own role/ownership gate.
pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route(
            "/profile/{user_id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/admin/{user_id}/is-admin", get(check_user_admin))
        .route("/mentor/{user_id}/is-mentor", get(check_user_mentor))
}
