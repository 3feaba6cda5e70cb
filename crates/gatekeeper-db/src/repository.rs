use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gatekeeper_models::User;

use crate::error::RepositoryError;

/// Storage for user accounts.
///
/// Lookups return `Ok(None)` for unknown keys. `insert` must reject a user
/// whose email, phone or user_id is already stored with
/// [`RepositoryError::Conflict`].
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<User>, RepositoryError>;

    async fn email_or_phone_taken(&self, email: &str, phone: &str)
    -> Result<bool, RepositoryError>;

    async fn insert(&self, user: User) -> Result<User, RepositoryError>;

    /// Replaces the stored token pair and bumps `updated_at`.
    async fn update_tokens(
        &self,
        user_id: &str,
        token: &str,
        refresh_token: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<User, RepositoryError>;

    /// One page of users in creation order, plus the total count.
    async fn list(&self, offset: i64, limit: i64) -> Result<(Vec<User>, i64), RepositoryError>;
}
