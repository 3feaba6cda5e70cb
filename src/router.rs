use axum::http::{HeaderName, Method, header};
use axum::routing::get;
use axum::{Json, Router, middleware};
use gatekeeper_models::MessageResponse;
use tower_http::cors::{Any, CorsLayer};

use crate::docs::openapi_json;
use crate::logging::logging_middleware;
use crate::middleware::auth::TOKEN_HEADER;
use crate::modules::auth::router::init_auth_router;
use crate::modules::users::router::init_users_router;
use crate::state::AppState;

async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome to the API!"))
}

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest(
            "/users",
            init_auth_router().merge(init_users_router(state.clone())),
        )
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([
                    header::CONTENT_TYPE,
                    header::ACCEPT,
                    HeaderName::from_static(TOKEN_HEADER),
                ]),
        )
        .layer(middleware::from_fn(logging_middleware))
}
