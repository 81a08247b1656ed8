//! Credential store abstraction.
//!
//! The service talks to user persistence exclusively through [`UserStore`].
//! Two implementations exist: [`postgres::PgUserStore`] for production and
//! [`memory::InMemoryUserStore`] for tests and local runs without a
//! database. The backend is picked by configuration at startup, never by
//! falling back at request time.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::users::model::{UserRecord, UserRole};
use crate::utils::errors::AppError;

/// Input for creating a user. `password` is already a bcrypt hash; callers
/// hash before handing data to the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub user_name: String,
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub current_mood: i32,
    pub emoji: String,
    pub role: UserRole,
}

/// Partial profile update. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub current_mood: Option<i32>,
    pub emoji: Option<String>,
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, AppError>;

    async fn find_by_user_name(&self, user_name: &str) -> Result<Option<UserRecord>, AppError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, AppError>;

    /// Creates a user, enforcing uniqueness on `user_name` and `email`.
    /// A conflict surfaces as [`AppError::DuplicateCredential`].
    async fn create(&self, user: NewUser) -> Result<UserRecord, AppError>;

    /// Applies a partial update. Returns `None` if the user does not exist.
    async fn update(&self, id: Uuid, changes: UserUpdate) -> Result<Option<UserRecord>, AppError>;

    /// Returns whether a user was actually deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;

    /// Bumps `last_seen` to now; a missing user is not an error here.
    async fn touch_last_seen(&self, id: Uuid) -> Result<(), AppError>;
}
