use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use chrono::{DateTime, Utc};
use gatekeeper_auth::{AuthContext, AuthError, TokenVerifier};
use gatekeeper_core::AppError;

use crate::state::AppState;

/// Request header carrying the raw access token.
pub const TOKEN_HEADER: &str = "token";

/// Reads the `token` header and verifies it at `now`.
///
/// Missing, empty and non-UTF-8 headers are all [`AuthError::MissingToken`]
/// and never reach the verifier.
pub fn context_from_headers(
    verifier: &TokenVerifier,
    headers: &HeaderMap,
    now: DateTime<Utc>,
) -> Result<AuthContext, AuthError> {
    let token = headers
        .get(TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::MissingToken)?;

    let claims = verifier.verify(token, now)?;
    AuthContext::try_from(claims)
}

/// Rejects the request with 401 unless it carries a valid access token;
/// otherwise inserts the caller's [`AuthContext`] and continues.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let context = context_from_headers(&state.verifier, req.headers(), Utc::now()).map_err(|e| {
        tracing::warn!(
            reason = %e,
            method = %req.method(),
            path = %req.uri().path(),
            "authentication failed"
        );
        e.into_app_error()
    })?;

    tracing::debug!(uid = %context.uid, user_type = %context.user_type, "authenticated");

    req.extensions_mut().insert(context);
    Ok(next.run(req).await)
}
