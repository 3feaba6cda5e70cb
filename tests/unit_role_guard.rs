mod common;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::get;
use common::{get_request, setup_test_app};
use gatekeeper::middleware::auth::authenticate;
use gatekeeper::middleware::role::require_admin;
use gatekeeper_auth::{AuthContext, AuthError, Role, match_user_type_to_uid, require_role};
use tower::ServiceExt;

fn context(user_type: Role) -> AuthContext {
    AuthContext {
        email: "a@b.com".to_string(),
        first_name: "A".to_string(),
        last_name: "B".to_string(),
        uid: "u1".to_string(),
        user_type,
    }
}

#[test]
fn test_require_admin_rejects_ordinary() {
    assert_eq!(
        require_role(Some(&context(Role::Ordinary)), Role::Admin),
        Err(AuthError::Forbidden)
    );
}

#[test]
fn test_require_admin_accepts_admin() {
    assert_eq!(require_role(Some(&context(Role::Admin)), Role::Admin), Ok(()));
}

#[test]
fn test_require_role_without_context_fails_closed() {
    assert_eq!(require_role(None, Role::Admin), Err(AuthError::Forbidden));
    assert_eq!(require_role(None, Role::Ordinary), Err(AuthError::Forbidden));
}

#[test]
fn test_role_strings_are_case_sensitive() {
    assert_eq!("ADMIN".parse::<Role>(), Ok(Role::Admin));
    assert!("admin".parse::<Role>().is_err());
    assert!("Admin".parse::<Role>().is_err());
}

#[test]
fn test_ordinary_user_limited_to_own_uid() {
    let ordinary = context(Role::Ordinary);
    assert_eq!(match_user_type_to_uid(Some(&ordinary), "u1"), Ok(()));
    assert_eq!(
        match_user_type_to_uid(Some(&ordinary), "u2"),
        Err(AuthError::Forbidden)
    );
    assert_eq!(
        match_user_type_to_uid(Some(&context(Role::Admin)), "u2"),
        Ok(())
    );
}

#[tokio::test]
async fn test_require_admin_middleware_without_authentication_fails_closed() {
    let app: Router = Router::new()
        .route("/admin", get(|| async { "ok" }))
        .route_layer(middleware::from_fn(require_admin));

    let response = app.oneshot(get_request("/admin", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_require_admin_middleware_after_authentication() {
    let (_, state) = setup_test_app();
    let (_, admin_tokens) = common::seed_user(&state, Role::Admin).await;
    let (_, ordinary_tokens) = common::seed_user(&state, Role::Ordinary).await;

    let app: Router = Router::new()
        .route("/admin", get(|| async { "ok" }))
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate))
        .with_state(state);

    let response = app
        .clone()
        .oneshot(get_request("/admin", Some(&admin_tokens.access_token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(get_request("/admin", Some(&ordinary_tokens.access_token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app.oneshot(get_request("/admin", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
