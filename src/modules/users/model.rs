//! User data models and DTOs.
//!
//! [`User`] is the API-facing shape and never carries the password hash;
//! [`UserRecord`] is what the credential store persists. Conversion from
//! record to user drops the hash.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::utils::errors::AppError;
use crate::utils::password::verify_password;

/// Neutral face, the default mood emoji for new accounts.
pub const DEFAULT_EMOJI: &str = "\u{1F610}";

/// Default mood rating on the 1-10 scale.
pub const DEFAULT_MOOD: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Mentor,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Mentor => "mentor",
            UserRole::Admin => "admin",
        }
    }

    pub fn parse(s: &str) -> Option<UserRole> {
        match s {
            "user" => Some(UserRole::User),
            "mentor" => Some(UserRole::Mentor),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub user_name: String,
    pub full_name: String,
    pub email: String,
    pub joined_at: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
    pub streak_count: i32,
    /// Current mood rating from 1-10.
    pub current_mood: i32,
    pub emoji: String,
    pub role: UserRole,
}

/// A user as persisted by the credential store, including the bcrypt hash.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: Uuid,
    pub user_name: String,
    pub full_name: String,
    pub email: String,
    /// bcrypt hash, never the plaintext.
    pub password: String,
    pub joined_at: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
    pub streak_count: i32,
    pub current_mood: i32,
    pub emoji: String,
    pub role: UserRole,
}

impl UserRecord {
    /// Compare a candidate password against the stored hash.
    pub fn verify_password(&self, candidate: &str) -> Result<bool, AppError> {
        verify_password(candidate, &self.password)
    }
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        User {
            id: record.id,
            user_name: record.user_name,
            full_name: record.full_name,
            email: record.email,
            joined_at: record.joined_at,
            last_seen: record.last_seen,
            streak_count: record.streak_count,
            current_mood: record.current_mood,
            emoji: record.emoji,
            role: record.role,
        }
    }
}

/// Profile update payload. Role and streak changes are not accepted here;
/// roles are set at registration and streaks are maintained internally.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 100, message = "fullName must be 1-100 characters"))]
    pub full_name: Option<String>,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,
    #[validate(range(min = 1, max = 10, message = "currentMood must be between 1 and 10"))]
    pub current_mood: Option<i32>,
    pub emoji: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStatus {
    pub is_admin: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorStatus {
    pub is_mentor: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_round_trip() {
        for role in [UserRole::User, UserRole::Mentor, UserRole::Admin] {
            assert_eq!(UserRole::parse(role.as_str()), Some(role));
        }
        assert_eq!(UserRole::parse("superuser"), None);
    }

    #[test]
    fn test_user_from_record_drops_hash() {
        let record = UserRecord {
            id: Uuid::new_v4(),
            user_name: "alice".to_string(),
            full_name: "Alice Lidell".to_string(),
            email: "alice@example.com".to_string(),
            password: "$2b$12$fakehash".to_string(),
            joined_at: Utc::now(),
            last_seen: Utc::now(),
            streak_count: 0,
            current_mood: DEFAULT_MOOD,
            emoji: DEFAULT_EMOJI.to_string(),
            role: UserRole::User,
        };

        let user = User::from(record.clone());
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["userName"], "alice");
        assert_eq!(json["role"], "user");
    }
}
