//! # Gatekeeper Auth
//!
//! Signed session tokens and role enforcement for the Gatekeeper API.
//!
//! - [`claims`]: the token payload ([`Claims`]), [`Role`] and [`Identity`]
//! - [`codec`]: HS256 compact encoding/decoding of claims ([`ClaimsCodec`])
//! - [`issuer`]: access/refresh pair minting ([`TokenIssuer`], [`TokenPair`])
//! - [`verifier`]: signature and expiry checks ([`TokenVerifier`])
//! - [`context`]: per-request identity ([`AuthContext`])
//! - [`guard`]: role checks against an established [`AuthContext`]
//! - [`error`]: the typed failure taxonomy ([`AuthError`])
//!
//! # Example
//!
//! ```ignore
//! use chrono::Utc;
//! use gatekeeper_auth::{Identity, Role, TokenIssuer, TokenVerifier};
//! use gatekeeper_config::JwtConfig;
//!
//! let config = JwtConfig::from_env()?;
//! let issuer = TokenIssuer::new(&config);
//! let verifier = TokenVerifier::new(&config);
//!
//! let identity = Identity {
//!     email: "a@b.com".into(),
//!     first_name: "A".into(),
//!     last_name: "B".into(),
//!     uid: "u1".into(),
//!     user_type: Role::Admin,
//! };
//! let pair = issuer.issue(&identity, Utc::now())?;
//! let claims = verifier.verify(&pair.access_token, Utc::now())?;
//! assert_eq!(claims.uid, "u1");
//! ```

pub mod claims;
pub mod codec;
pub mod context;
pub mod error;
pub mod guard;
pub mod issuer;
pub mod verifier;

// Re-export commonly used types at crate root
pub use claims::{Claims, Identity, Role, UnknownRole};
pub use codec::ClaimsCodec;
pub use context::AuthContext;
pub use error::AuthError;
pub use guard::{match_user_type_to_uid, require_role};
pub use issuer::{TokenIssuer, TokenPair};
pub use verifier::TokenVerifier;
