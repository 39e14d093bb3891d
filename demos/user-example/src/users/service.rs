use tracing::{debug, info};

use super::domain::{NewUser, User, UserId};
use super::repository::UserRepository;
use crate::errors::ApiError;

/// User use cases, on top of the repository
#[derive(Debug, Clone, Default)]
pub(crate) struct UserService {
    repository: UserRepository,
}

impl UserService {
    pub(crate) async fn create(&self, new_user: NewUser) -> Result<User, ApiError> {
        if new_user.name.trim().is_empty() {
            return Err(ApiError::InvalidUser {
                reason: "name cannot be blank",
            });
        }
        if !new_user.email.contains('@') {
            return Err(ApiError::InvalidUser {
                reason: "email must contain '@'",
            });
        }

        let user = self.repository.create(new_user).await;
        info!(id = %user.id, "user created");

        Ok(user)
    }

    pub(crate) async fn list(&self, name: Option<&str>) -> Vec<User> {
        let users = self.repository.list(name).await;
        debug!(?name, count = users.len(), "users listed");

        users
    }

    pub(crate) async fn get(&self, id: UserId) -> Result<User, ApiError> {
        self.repository.get(id).await
    }

    pub(crate) async fn delete(&self, id: UserId) -> Result<(), ApiError> {
        self.repository.delete(id).await?;
        info!(%id, "user deleted");

        Ok(())
    }
}
