#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use chrono::Utc;
use gatekeeper::router::init_router;
use gatekeeper::state::AppState;
use gatekeeper_auth::{Role, TokenPair};
use gatekeeper_config::JwtConfig;
use gatekeeper_models::User;
use http_body_util::BodyExt;
use serde_json::Value;
use uuid::Uuid;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes";

pub fn jwt_config() -> JwtConfig {
    JwtConfig::new(TEST_SECRET).unwrap()
}

/// Router over a fresh in-memory store. The state is returned so tests can
/// seed users and mint tokens with the same key.
pub fn setup_test_app() -> (Router, AppState) {
    let state = AppState::in_memory(&jwt_config());
    (init_router(state.clone()), state)
}

pub fn generate_unique_email() -> String {
    format!("test_{}@example.com", Uuid::new_v4().simple())
}

pub fn generate_unique_phone() -> String {
    format!("+1{}", Uuid::new_v4().as_u128() % 10_000_000_000)
}

/// Inserts a user directly into the repository, bypassing password hashing,
/// and returns it with a freshly issued token pair.
pub async fn seed_user(state: &AppState, user_type: Role) -> (User, TokenPair) {
    let now = Utc::now();
    let mut user = User {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4().simple().to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        email: generate_unique_email(),
        phone: generate_unique_phone(),
        password: "not-a-bcrypt-hash".to_string(),
        user_type,
        token: None,
        refresh_token: None,
        created_at: now,
        updated_at: now,
    };

    let pair = state.issuer.issue(&user.identity(), now).unwrap();
    user.token = Some(pair.access_token.clone());
    user.refresh_token = Some(pair.refresh_token.clone());

    let user = state.users.insert(user).await.unwrap();
    (user, pair)
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

pub fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("token", token);
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
