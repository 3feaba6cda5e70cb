use gatekeeper_core::AppError;
use thiserror::Error;

pub const DUPLICATE_USER_MESSAGE: &str = "this email or phone number already exists";

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A unique column (email, phone or user_id) already holds this value.
    #[error("this email or phone number already exists")]
    Conflict,

    #[error("user not found")]
    NotFound,

    /// A stored row could not be mapped back into a [`gatekeeper_models::User`].
    #[error("corrupt user record: {0}")]
    Corrupt(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl RepositoryError {
    /// `?` would turn every repository error into a 500 through the blanket
    /// conversion; this keeps conflicts and misses as 409 and 404.
    pub fn into_app_error(self) -> AppError {
        match self {
            RepositoryError::Conflict => AppError::conflict(self),
            RepositoryError::NotFound => AppError::not_found(self),
            other => AppError::database(other),
        }
    }
}
