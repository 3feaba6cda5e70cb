//! # Gatekeeper Models
//!
//! Domain models and DTOs for the Gatekeeper API.
//!
//! - [`users`]: the stored [`User`] record and the views returned over HTTP
//! - [`auth`]: signup/login request bodies and the token-bearing response
//!
//! # Example
//!
//! ```ignore
//! use gatekeeper_models::{User, UserResponse};
//!
//! let view = UserResponse::from(&user);
//! assert_eq!(view.user_id, user.user_id);
//! ```

pub mod auth;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use auth::{AuthResponse, LoginRequest, MessageResponse, SignupRequest};
pub use users::{PaginatedUsersResponse, User, UserResponse};
