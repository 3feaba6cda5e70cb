use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gatekeeper_models::User;
use tokio::sync::RwLock;

use crate::error::RepositoryError;
use crate::repository::UserRepository;

/// Process-local user store. Users are kept in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<User>, RepositoryError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.user_id == user_id).cloned())
    }

    async fn email_or_phone_taken(
        &self,
        email: &str,
        phone: &str,
    ) -> Result<bool, RepositoryError> {
        let users = self.users.read().await;
        Ok(users.iter().any(|u| u.email == email || u.phone == phone))
    }

    async fn insert(&self, user: User) -> Result<User, RepositoryError> {
        // Uniqueness check and push happen under the same write lock.
        let mut users = self.users.write().await;
        let taken = users.iter().any(|u| {
            u.email == user.email || u.phone == user.phone || u.user_id == user.user_id
        });
        if taken {
            return Err(RepositoryError::Conflict);
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn update_tokens(
        &self,
        user_id: &str,
        token: &str,
        refresh_token: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<User, RepositoryError> {
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|u| u.user_id == user_id)
            .ok_or(RepositoryError::NotFound)?;

        user.token = Some(token.to_string());
        user.refresh_token = Some(refresh_token.to_string());
        user.updated_at = updated_at;

        Ok(user.clone())
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<(Vec<User>, i64), RepositoryError> {
        let users = self.users.read().await;
        let total = users.len() as i64;
        let page = users
            .iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect();
        Ok((page, total))
    }
}
