use axum::{extract::FromRequestParts, http::request::Parts};
use serde::Serialize;
use utoipa::ToSchema;

use gatekeeper_core::AppError;

use crate::claims::{Claims, Identity, Role};
use crate::error::AuthError;

/// Identity established for the current request.
///
/// Inserted into request extensions by the authentication middleware once a
/// token verifies, and dropped with the request. Handlers take it as an
/// extractor; it is never rebuilt from the raw token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AuthContext {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub uid: String,
    pub user_type: Role,
}

impl AuthContext {
    pub fn is_admin(&self) -> bool {
        self.user_type == Role::Admin
    }
}

impl From<Identity> for AuthContext {
    fn from(identity: Identity) -> Self {
        Self {
            email: identity.email,
            first_name: identity.first_name,
            last_name: identity.last_name,
            uid: identity.uid,
            user_type: identity.user_type,
        }
    }
}

/// Only access tokens carry an identity; a refresh token presented here is
/// rejected as malformed.
impl TryFrom<Claims> for AuthContext {
    type Error = AuthError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        claims
            .identity()
            .map(AuthContext::from)
            .ok_or(AuthError::MalformedToken)
    }
}

impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| AuthError::MissingToken.into_app_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, StatusCode};

    fn context() -> AuthContext {
        AuthContext {
            email: "a@b.com".to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            uid: "u1".to_string(),
            user_type: Role::Ordinary,
        }
    }

    #[test]
    fn test_try_from_access_claims() {
        let identity = Identity {
            email: "a@b.com".to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            uid: "u1".to_string(),
            user_type: Role::Ordinary,
        };
        let ctx = AuthContext::try_from(Claims::access(&identity, 1, 2)).unwrap();
        assert_eq!(ctx, context());
        assert!(!ctx.is_admin());
    }

    #[test]
    fn test_try_from_refresh_claims_fails() {
        assert_eq!(
            AuthContext::try_from(Claims::refresh(1, 2)),
            Err(AuthError::MalformedToken)
        );
    }

    #[tokio::test]
    async fn test_extractor_reads_extensions() {
        let mut request = Request::new(());
        request.extensions_mut().insert(context());
        let (mut parts, _) = request.into_parts();

        let ctx = AuthContext::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(ctx.uid, "u1");
    }

    #[tokio::test]
    async fn test_extractor_rejects_without_context() {
        let (mut parts, _) = Request::new(()).into_parts();

        let err = AuthContext::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }
}
