use axum::Json;
use gatekeeper_auth::{AuthContext, Role};
use gatekeeper_core::{PaginationMeta, PaginationParams};
use gatekeeper_models::{
    AuthResponse, LoginRequest, MessageResponse, PaginatedUsersResponse, SignupRequest,
    UserResponse,
};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::middleware::auth::TOKEN_HEADER;
use crate::modules::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::signup_user,
        crate::modules::auth::controller::login_user,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::get_user,
    ),
    components(
        schemas(
            Role,
            AuthContext,
            SignupRequest,
            LoginRequest,
            AuthResponse,
            UserResponse,
            PaginatedUsersResponse,
            PaginationMeta,
            PaginationParams,
            MessageResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Signup and login"),
        (name = "Users", description = "User lookup and listing")
    ),
    info(
        title = "Gatekeeper API",
        version = "0.1.0",
        description = "User management API with HS256 access/refresh tokens and role-based access control.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "token",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(TOKEN_HEADER))),
            )
        }
    }
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
