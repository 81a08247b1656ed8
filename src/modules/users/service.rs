use tracing::instrument;
use uuid::Uuid;

use crate::modules::users::model::{UpdateUserRequest, User, UserRole};
use crate::store::{UserStore, UserUpdate};
use crate::utils::errors::AppError;

pub struct UserService;

impl UserService {
    pub async fn get_user(store: &dyn UserStore, id: Uuid) -> Result<User, AppError> {
        store
            .find_by_id(id)
            .await?
            .map(User::from)
            .ok_or_else(|| AppError::NotFound(format!("User with ID {id} not found")))
    }

    #[instrument(skip_all, fields(user_id = %id))]
    pub async fn update_user(
        store: &dyn UserStore,
        id: Uuid,
        dto: UpdateUserRequest,
    ) -> Result<User, AppError> {
        store
            .update(
                id,
                UserUpdate {
                    full_name: dto.full_name,
                    email: dto.email.map(|e| e.to_lowercase()),
                    current_mood: dto.current_mood,
                    emoji: dto.emoji,
                },
            )
            .await?
            .map(User::from)
            .ok_or_else(|| AppError::NotFound(format!("User with ID {id} not found")))
    }

    #[instrument(skip_all, fields(user_id = %id))]
    pub async fn delete_user(store: &dyn UserStore, id: Uuid) -> Result<(), AppError> {
        if !store.delete(id).await? {
            return Err(AppError::NotFound(format!("User with ID {id} not found")));
        }
        Ok(())
    }

    pub async fn is_admin(store: &dyn UserStore, id: Uuid) -> Result<bool, AppError> {
        let user = Self::get_user(store, id).await?;
        Ok(user.role == UserRole::Admin)
    }

    pub async fn is_mentor(store: &dyn UserStore, id: Uuid) -> Result<bool, AppError> {
        let user = Self::get_user(store, id).await?;
        Ok(user.role == UserRole::Mentor)
    }
}
