use uuid::Uuid;

use mindspace_api::middleware::auth::CurrentUser;
use mindspace_api::middleware::role::{
    require_admin, require_mentor_or_admin, require_ownership_or_admin,
};
use mindspace_api::modules::users::model::UserRole;
use mindspace_api::utils::errors::AppError;

fn current_user(id: Uuid, role: UserRole) -> CurrentUser {
    CurrentUser {
        id,
        user_name: "test".to_string(),
        email: "test@example.com".to_string(),
        role,
    }
}

#[test]
fn test_require_admin() {
    let admin = current_user(Uuid::new_v4(), UserRole::Admin);
    assert!(require_admin(&admin).is_ok());

    let mentor = current_user(Uuid::new_v4(), UserRole::Mentor);
    assert!(matches!(require_admin(&mentor), Err(AppError::Forbidden(_))));

    let user = current_user(Uuid::new_v4(), UserRole::User);
    assert!(matches!(require_admin(&user), Err(AppError::Forbidden(_))));
}

#[test]
fn test_require_mentor_or_admin() {
    let admin = current_user(Uuid::new_v4(), UserRole::Admin);
    assert!(require_mentor_or_admin(&admin).is_ok());

    let mentor = current_user(Uuid::new_v4(), UserRole::Mentor);
    assert!(require_mentor_or_admin(&mentor).is_ok());

    let user = current_user(Uuid::new_v4(), UserRole::User);
    assert!(matches!(
        require_mentor_or_admin(&user),
        Err(AppError::Forbidden(_))
    ));
}

#[test]
fn test_require_ownership_or_admin_owner_passes() {
    let id = Uuid::new_v4();
    let user = current_user(id, UserRole::User);
    assert!(require_ownership_or_admin(&user, id).is_ok());
}

#[test]
fn test_require_ownership_or_admin_other_user_forbidden() {
    let user = current_user(Uuid::new_v4(), UserRole::User);
    let result = require_ownership_or_admin(&user, Uuid::new_v4());
    assert!(matches!(result, Err(AppError::Forbidden(_))));

    // Mentors get no ownership bypass either.
    let mentor = current_user(Uuid::new_v4(), UserRole::Mentor);
    let result = require_ownership_or_admin(&mentor, Uuid::new_v4());
    assert!(matches!(result, Err(AppError::Forbidden(_))));
}

#[test]
fn test_require_ownership_or_admin_admin_passes_on_any_resource() {
    let admin = current_user(Uuid::new_v4(), UserRole::Admin);
    assert!(require_ownership_or_admin(&admin, Uuid::new_v4()).is_ok());
}
