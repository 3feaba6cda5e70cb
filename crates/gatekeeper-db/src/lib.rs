//! # Gatekeeper DB
//!
//! User persistence for the Gatekeeper API.
//!
//! [`UserRepository`] is the seam the HTTP layer talks to. Two
//! implementations ship with the crate:
//!
//! - [`InMemoryUserRepository`]: process-local, used when no database is
//!   configured and by the test suite
//! - [`PgUserRepository`]: PostgreSQL through `sqlx`
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use gatekeeper_db::{PgUserRepository, UserRepository, init_db_pool, run_migrations};
//!
//! let pool = init_db_pool(&database_url).await?;
//! run_migrations(&pool).await?;
//! let users: Arc<dyn UserRepository> = Arc::new(PgUserRepository::new(pool));
//! ```

pub mod error;
pub mod memory;
pub mod postgres;
pub mod repository;

pub use error::RepositoryError;
pub use memory::InMemoryUserRepository;
pub use postgres::{PgUserRepository, init_db_pool, run_migrations};
pub use repository::UserRepository;

// Re-export PgPool for convenience
pub use sqlx::PgPool;
