use axum::Json;
use axum::extract::{Path, Query, State};
use gatekeeper_auth::AuthContext;
use gatekeeper_core::{AppError, PaginationParams};
use gatekeeper_models::{PaginatedUsersResponse, UserResponse};
use tracing::instrument;

use crate::middleware::role::RequireAdmin;
use crate::modules::ErrorResponse;
use crate::state::AppState;

use super::service::UserService;

/// List users (ADMIN only)
#[utoipa::path(
    get,
    path = "/users",
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated list of users", body = PaginatedUsersResponse),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
        (status = 403, description = "Caller is not an ADMIN", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("token" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state, admin), fields(admin_uid = %admin.uid))]
pub async fn get_users(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PaginatedUsersResponse>, AppError> {
    let response = UserService::list_users(&state, &params).await?;
    Ok(Json(response))
}

/// Get a single user by public user id
///
/// ORDINARY callers may only read their own record.
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    params(
        ("user_id" = String, Path, description = "Public user identifier")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
        (status = 403, description = "Not allowed to read this user", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(
        ("token" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state, ctx), fields(caller_uid = %ctx.uid))]
pub async fn get_user(
    State(state): State<AppState>,
    ctx: AuthContext,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let user = UserService::get_user(&state, &ctx, &user_id).await?;
    Ok(Json(user))
}
