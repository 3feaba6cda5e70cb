//! Authentication failure taxonomy.
//!
//! Variants stay distinguishable for callers and logs, but the HTTP body
//! only ever says "invalid or expired token" for verification failures.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use gatekeeper_core::AppError;
use thiserror::Error;

pub const INVALID_TOKEN_MESSAGE: &str = "invalid or expired token";
pub const MISSING_TOKEN_MESSAGE: &str = "No Authorization header provided";
pub const FORBIDDEN_MESSAGE: &str = "Unauthorized to access this resource";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("no token provided")]
    MissingToken,

    #[error("token is malformed")]
    MalformedToken,

    #[error("token signature is invalid")]
    InvalidSignature,

    #[error("token has expired")]
    Expired,

    #[error("insufficient role for this resource")]
    Forbidden,

    /// Signing failed; a configuration problem, not a client error.
    #[error("failed to sign token: {0}")]
    Signing(String),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingToken
            | AuthError::MalformedToken
            | AuthError::InvalidSignature
            | AuthError::Expired => StatusCode::UNAUTHORIZED,
            AuthError::Forbidden => StatusCode::FORBIDDEN,
            AuthError::Signing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Does not reveal which verification check failed.
    pub fn public_message(&self) -> &'static str {
        match self {
            AuthError::MissingToken => MISSING_TOKEN_MESSAGE,
            AuthError::MalformedToken | AuthError::InvalidSignature | AuthError::Expired => {
                INVALID_TOKEN_MESSAGE
            }
            AuthError::Forbidden => FORBIDDEN_MESSAGE,
            AuthError::Signing(_) => "Failed to issue token",
        }
    }

    /// `AuthError` is a std error, so `?` into `AppError` would go through the
    /// blanket 500 conversion. Use this instead.
    pub fn into_app_error(self) -> AppError {
        AppError::with_message(self.status_code(), self.public_message())
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.into_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_failures_are_401_with_generic_message() {
        for err in [
            AuthError::MalformedToken,
            AuthError::InvalidSignature,
            AuthError::Expired,
        ] {
            let app_err = err.into_app_error();
            assert_eq!(app_err.status, StatusCode::UNAUTHORIZED);
            assert_eq!(app_err.error.to_string(), INVALID_TOKEN_MESSAGE);
        }
    }

    #[test]
    fn test_missing_token_is_401() {
        let app_err = AuthError::MissingToken.into_app_error();
        assert_eq!(app_err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(app_err.error.to_string(), MISSING_TOKEN_MESSAGE);
    }

    #[test]
    fn test_forbidden_is_403() {
        let response = AuthError::Forbidden.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_signing_failure_is_500() {
        let app_err = AuthError::Signing("bad key".to_string()).into_app_error();
        assert_eq!(app_err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!app_err.error.to_string().contains("bad key"));
    }
}
