//! # Gatekeeper Config
//!
//! Configuration structures loaded once at startup from environment variables:
//!
//! - [`jwt`]: signing key and token lifetimes
//! - [`server`]: listen port and optional database URL
//! - [`logging`]: log filter, output format and optional log directory
//!
//! Each loader has a `from_lookup` variant that takes a key lookup closure,
//! so tests can feed values without touching the process environment.
//!
//! # Example
//!
//! ```ignore
//! use gatekeeper_config::{JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env()?;
//! let server_config = ServerConfig::from_env()?;
//! ```

pub mod error;
pub mod jwt;
pub mod logging;
pub mod server;

// Re-export commonly used types at crate root
pub use error::ConfigError;
pub use jwt::{JwtConfig, SigningKey};
pub use logging::{LogFormat, LoggingConfig};
pub use server::ServerConfig;
