//! Role-based authorization for Axum.
//!
//! Two ways to guard a route, both fail closed when no
//! [`AuthContext`] has been established:
//! 1. Layer-based middleware: [`require_roles`] / [`require_admin`]
//! 2. Extractor-based: [`RequireAdmin`]

use axum::{
    extract::{FromRequestParts, Request},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};
use gatekeeper_auth::{AuthContext, AuthError, Role, require_role};
use gatekeeper_core::AppError;

/// Checks the [`AuthContext`] left by `authenticate` against `required`.
///
/// Must run inside the `authenticate` layer.
pub async fn require_roles(req: Request, next: Next, required: Role) -> Result<Response, AppError> {
    require_role(req.extensions().get::<AuthContext>(), required)
        .map_err(AuthError::into_app_error)?;

    Ok(next.run(req).await)
}

/// Middleware for admin-only routes.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, middleware, routing::get};
/// use crate::middleware::role::require_admin;
///
/// let admin_routes = Router::new()
///     .route("/", get(list_users))
///     .route_layer(middleware::from_fn(require_admin));
/// ```
pub async fn require_admin(req: Request, next: Next) -> Response {
    match require_roles(req, next, Role::Admin).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Extractor for admin-level access. Yields the caller's context.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AuthContext);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let context = parts.extensions.get::<AuthContext>();
        require_role(context, Role::Admin).map_err(AuthError::into_app_error)?;

        // require_role only succeeds with a context present
        context
            .cloned()
            .map(RequireAdmin)
            .ok_or_else(|| AuthError::Forbidden.into_app_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request as HttpRequest, StatusCode};

    fn context(user_type: Role) -> AuthContext {
        AuthContext {
            email: "a@b.com".to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            uid: "u1".to_string(),
            user_type,
        }
    }

    async fn extract(ctx: Option<AuthContext>) -> Result<RequireAdmin, AppError> {
        let mut request = HttpRequest::new(());
        if let Some(ctx) = ctx {
            request.extensions_mut().insert(ctx);
        }
        let (mut parts, _) = request.into_parts();
        RequireAdmin::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_require_admin_extractor_accepts_admin() {
        let RequireAdmin(ctx) = extract(Some(context(Role::Admin))).await.unwrap();
        assert_eq!(ctx.user_type, Role::Admin);
    }

    #[tokio::test]
    async fn test_require_admin_extractor_rejects_ordinary() {
        let err = extract(Some(context(Role::Ordinary))).await.unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_require_admin_extractor_fails_closed() {
        let err = extract(None).await.unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
    }
}
