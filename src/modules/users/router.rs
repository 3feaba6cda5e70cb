use axum::{Router, middleware, routing::get};

use crate::middleware::auth::authenticate;
use crate::middleware::role::require_admin;
use crate::state::AppState;

use super::controller::{get_user, get_users};

/// Every route here requires a valid access token; listing also requires ADMIN.
pub fn init_users_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(get_users).route_layer(middleware::from_fn(require_admin)),
        )
        .route("/{user_id}", get(get_user))
        .route_layer(middleware::from_fn_with_state(state, authenticate))
}
