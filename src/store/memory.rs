use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{NewUser, UserStore, UserUpdate};
use crate::modules::users::model::UserRecord;
use crate::utils::errors::AppError;

/// In-memory [`UserStore`] backed by a `HashMap` behind an async lock.
/// Used by the test suite and the `memory` backend configuration.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<Uuid, UserRecord>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, AppError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_by_user_name(&self, user_name: &str) -> Result<Option<UserRecord>, AppError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.user_name == user_name).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, AppError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<UserRecord, AppError> {
        let mut users = self.users.write().await;

        let taken = users
            .values()
            .any(|u| u.user_name == user.user_name || u.email == user.email);
        if taken {
            return Err(AppError::DuplicateCredential);
        }

        let now = Utc::now();
        let record = UserRecord {
            id: Uuid::new_v4(),
            user_name: user.user_name,
            full_name: user.full_name,
            email: user.email,
            password: user.password,
            joined_at: now,
            last_seen: now,
            streak_count: 0,
            current_mood: user.current_mood,
            emoji: user.emoji,
            role: user.role,
        };

        users.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update(&self, id: Uuid, changes: UserUpdate) -> Result<Option<UserRecord>, AppError> {
        let mut users = self.users.write().await;

        if let Some(email) = &changes.email {
            let taken = users.values().any(|u| u.id != id && &u.email == email);
            if taken {
                return Err(AppError::DuplicateCredential);
            }
        }

        let Some(record) = users.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(full_name) = changes.full_name {
            record.full_name = full_name;
        }
        if let Some(email) = changes.email {
            record.email = email;
        }
        if let Some(current_mood) = changes.current_mood {
            record.current_mood = current_mood;
        }
        if let Some(emoji) = changes.emoji {
            record.emoji = emoji;
        }

        Ok(Some(record.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.users.write().await.remove(&id).is_some())
    }

    async fn touch_last_seen(&self, id: Uuid) -> Result<(), AppError> {
        if let Some(record) = self.users.write().await.get_mut(&id) {
            record.last_seen = Utc::now();
        }
        Ok(())
    }
}
