use chrono::Utc;
use gatekeeper_auth::TokenPair;
use gatekeeper_core::{AppError, hash_password, verify_password};
use gatekeeper_db::RepositoryError;
use gatekeeper_models::{AuthResponse, LoginRequest, SignupRequest, User, UserResponse};
use tracing::instrument;
use uuid::Uuid;

use crate::state::AppState;

pub const INVALID_CREDENTIALS_MESSAGE: &str = "email or password is incorrect";

pub struct AuthService;

impl AuthService {
    /// Creates the account and issues its first token pair.
    #[instrument(skip(state, dto))]
    pub async fn signup(state: &AppState, dto: SignupRequest) -> Result<AuthResponse, AppError> {
        if state
            .users
            .email_or_phone_taken(&dto.email, &dto.phone)
            .await
            .map_err(RepositoryError::into_app_error)?
        {
            return Err(RepositoryError::Conflict.into_app_error());
        }

        let password = dto.password;
        let hashed_password = tokio::task::spawn_blocking(move || hash_password(&password)).await??;

        let now = Utc::now();
        let mut user = User {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4().simple().to_string(),
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            phone: dto.phone,
            password: hashed_password,
            user_type: dto.user_type,
            token: None,
            refresh_token: None,
            created_at: now,
            updated_at: now,
        };

        let pair = state
            .issuer
            .issue(&user.identity(), now)
            .map_err(|e| e.into_app_error())?;
        user.token = Some(pair.access_token.clone());
        user.refresh_token = Some(pair.refresh_token.clone());

        let user = state
            .users
            .insert(user)
            .await
            .map_err(RepositoryError::into_app_error)?;

        tracing::info!(user_id = %user.user_id, user_type = %user.user_type, "user signed up");

        Ok(auth_response(&user, pair))
    }

    /// Verifies credentials, then replaces the stored token pair with a fresh one.
    #[instrument(skip(state, dto))]
    pub async fn login(state: &AppState, dto: LoginRequest) -> Result<AuthResponse, AppError> {
        let user = state
            .users
            .find_by_email(&dto.email)
            .await
            .map_err(RepositoryError::into_app_error)?
            .ok_or_else(|| AppError::unauthorized(INVALID_CREDENTIALS_MESSAGE))?;

        let password = dto.password;
        let hash = user.password.clone();
        let is_valid =
            tokio::task::spawn_blocking(move || verify_password(&password, &hash)).await??;

        if !is_valid {
            tracing::debug!(user_id = %user.user_id, "password mismatch");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS_MESSAGE));
        }

        let now = Utc::now();
        let pair = state
            .issuer
            .issue(&user.identity(), now)
            .map_err(|e| e.into_app_error())?;

        let user = state
            .users
            .update_tokens(&user.user_id, &pair.access_token, &pair.refresh_token, now)
            .await
            .map_err(RepositoryError::into_app_error)?;

        tracing::info!(user_id = %user.user_id, "user logged in");

        Ok(auth_response(&user, pair))
    }
}

fn auth_response(user: &User, pair: TokenPair) -> AuthResponse {
    AuthResponse {
        user: UserResponse::from(user),
        token: pair.access_token,
        refresh_token: pair.refresh_token,
    }
}
