use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::domain::{NewUser, User, UserId};
use crate::errors::ApiError;

#[derive(Debug, Clone, Default)]
pub(crate) struct UserRepository {
    data: Arc<RwLock<BTreeMap<UserId, NewUser>>>,
}

impl UserRepository {
    pub(crate) async fn list(&self, name: Option<&str>) -> Vec<User> {
        let data = self.data.read().await;

        data.iter()
            .filter(|(_, user)| name.is_none_or(|name| user.name.contains(name)))
            .map(|(id, user)| User {
                id: *id,
                data: user.clone(),
            })
            .collect()
    }

    pub(crate) async fn create(&self, new_user: NewUser) -> User {
        let mut data = self.data.write().await;
        let id = {
            let max = data.keys().next_back().map_or(0, |it| it.0);
            UserId(max + 1)
        };
        data.insert(id, new_user.clone());

        User { id, data: new_user }
    }

    pub(crate) async fn get(&self, id: UserId) -> Result<User, ApiError> {
        let data = self.data.read().await;

        let Some(user) = data.get(&id) else {
            return Err(ApiError::UserNotFound { id });
        };

        Ok(User {
            id,
            data: user.clone(),
        })
    }

    pub(crate) async fn delete(&self, id: UserId) -> Result<NewUser, ApiError> {
        let mut data = self.data.write().await;

        data.remove(&id).ok_or(ApiError::UserNotFound { id })
    }
}
