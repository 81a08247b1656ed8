//! Role- and ownership-based authorization gates.
//!
//! Each gate is a plain decision function over an already-resolved
//! [`CurrentUser`]. Authentication is a precondition enforced once per
//! request by the [`AuthUser`](crate::middleware::auth::AuthUser) extractor;
//! gates never re-run token verification. Decisions are stateless and
//! recomputed on every call.

use uuid::Uuid;

use crate::middleware::auth::CurrentUser;
use crate::modules::users::model::UserRole;
use crate::utils::errors::AppError;

pub fn require_admin(user: &CurrentUser) -> Result<(), AppError> {
    if user.role != UserRole::Admin {
        return Err(AppError::Forbidden("Admin access required".to_string()));
    }
    Ok(())
}

pub fn require_mentor_or_admin(user: &CurrentUser) -> Result<(), AppError> {
    if user.role != UserRole::Mentor && user.role != UserRole::Admin {
        return Err(AppError::Forbidden(
            "Mentor or Admin access required".to_string(),
        ));
    }
    Ok(())
}

/// Admins may touch any resource; everyone else only their own.
pub fn require_ownership_or_admin(
    user: &CurrentUser,
    resource_owner: Uuid,
) -> Result<(), AppError> {
    if user.role == UserRole::Admin || user.id == resource_owner {
        return Ok(());
    }
    Err(AppError::Forbidden(
        "Access denied. You can only access your own resources.".to_string(),
    ))
}
