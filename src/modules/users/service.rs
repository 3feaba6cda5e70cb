use gatekeeper_auth::{AuthContext, AuthError, match_user_type_to_uid};
use gatekeeper_core::{AppError, PaginationMeta, PaginationParams};
use gatekeeper_db::RepositoryError;
use gatekeeper_models::{PaginatedUsersResponse, UserResponse};
use tracing::instrument;

use crate::state::AppState;

pub struct UserService;

impl UserService {
    #[instrument(skip(state))]
    pub async fn list_users(
        state: &AppState,
        params: &PaginationParams,
    ) -> Result<PaginatedUsersResponse, AppError> {
        let (users, total) = state
            .users
            .list(params.offset(), params.limit())
            .await
            .map_err(RepositoryError::into_app_error)?;

        Ok(PaginatedUsersResponse {
            data: users.iter().map(UserResponse::from).collect(),
            meta: PaginationMeta::from_params(params, total),
        })
    }

    /// Access is checked before the lookup, so an ORDINARY caller cannot
    /// tell an unknown id from someone else's.
    #[instrument(skip(state, ctx))]
    pub async fn get_user(
        state: &AppState,
        ctx: &AuthContext,
        user_id: &str,
    ) -> Result<UserResponse, AppError> {
        match_user_type_to_uid(Some(ctx), user_id).map_err(AuthError::into_app_error)?;

        let user = state
            .users
            .find_by_user_id(user_id)
            .await
            .map_err(RepositoryError::into_app_error)?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("user not found")))?;

        Ok(UserResponse::from(&user))
    }
}
