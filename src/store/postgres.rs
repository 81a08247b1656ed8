use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::{NewUser, UserStore, UserUpdate};
use crate::modules::users::model::{UserRecord, UserRole};
use crate::utils::errors::AppError;

const USER_COLUMNS: &str = "id, user_name, full_name, email, password, joined_at, last_seen, \
                            streak_count, current_mood, emoji, role";

/// PostgreSQL-backed [`UserStore`]. Uniqueness on `user_name` and `email` is
/// enforced by the schema; unique violations are mapped to
/// [`AppError::DuplicateCredential`] by the `sqlx::Error` conversion.
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Row shape with the role as raw text; converted into [`UserRecord`] so the
/// rest of the crate only sees the typed enum.
#[derive(Debug, FromRow)]
struct UserRow {
    id: Uuid,
    user_name: String,
    full_name: String,
    email: String,
    password: String,
    joined_at: DateTime<Utc>,
    last_seen: DateTime<Utc>,
    streak_count: i32,
    current_mood: i32,
    emoji: String,
    role: String,
}

impl TryFrom<UserRow> for UserRecord {
    type Error = AppError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role = UserRole::parse(&row.role).ok_or_else(|| {
            AppError::Internal(anyhow::anyhow!("unknown role in database: {}", row.role))
        })?;

        Ok(UserRecord {
            id: row.id,
            user_name: row.user_name,
            full_name: row.full_name,
            email: row.email,
            password: row.password,
            joined_at: row.joined_at,
            last_seen: row.last_seen,
            streak_count: row.streak_count,
            current_mood: row.current_mood,
            emoji: row.emoji,
            role,
        })
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRecord::try_from).transpose()
    }

    async fn find_by_user_name(&self, user_name: &str) -> Result<Option<UserRecord>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE user_name = $1"
        ))
        .bind(user_name)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRecord::try_from).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRecord::try_from).transpose()
    }

    async fn create(&self, user: NewUser) -> Result<UserRecord, AppError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "INSERT INTO users (user_name, full_name, email, password, current_mood, emoji, role) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&user.user_name)
        .bind(&user.full_name)
        .bind(&user.email)
        .bind(&user.password)
        .bind(user.current_mood)
        .bind(&user.emoji)
        .bind(user.role.as_str())
        .fetch_one(&self.pool)
        .await?;

        UserRecord::try_from(row)
    }

    async fn update(&self, id: Uuid, changes: UserUpdate) -> Result<Option<UserRecord>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "UPDATE users SET \
                 full_name = COALESCE($2, full_name), \
                 email = COALESCE($3, email), \
                 current_mood = COALESCE($4, current_mood), \
                 emoji = COALESCE($5, emoji) \
             WHERE id = $1 \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .bind(changes.full_name)
        .bind(changes.email)
        .bind(changes.current_mood)
        .bind(changes.emoji)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRecord::try_from).transpose()
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn touch_last_seen(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("UPDATE users SET last_seen = now() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
