//! Middleware and extractors for authentication and authorization.
//!
//! - [`auth`]: the `authenticate` gate that turns the `token` header into an
//!   [`AuthContext`](gatekeeper_auth::AuthContext)
//! - [`role`]: role checks layered on top of an authenticated request
//!
//! # Authentication Flow
//!
//! 1. Client sends the access token in the `token` header
//! 2. `authenticate` verifies it and stores an `AuthContext` in the request extensions
//! 3. `require_admin` / `RequireAdmin` reject non-admin callers where required
//! 4. Handlers take `AuthContext` as an extractor
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, middleware, routing::get};
//! use crate::middleware::{auth::authenticate, role::require_admin};
//!
//! let router = Router::new()
//!     .route("/", get(list_users).route_layer(middleware::from_fn(require_admin)))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));
//! ```

pub mod auth;
pub mod role;
