use std::fmt;
use std::sync::Arc;

use gatekeeper_auth::{ClaimsCodec, TokenIssuer, TokenVerifier};
use gatekeeper_config::{JwtConfig, ServerConfig};
use gatekeeper_db::{
    InMemoryUserRepository, PgUserRepository, RepositoryError, UserRepository, init_db_pool,
    run_migrations,
};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub issuer: TokenIssuer,
    pub verifier: TokenVerifier,
}

impl AppState {
    /// Issuer and verifier share one codec built from `jwt_config`.
    pub fn new(users: Arc<dyn UserRepository>, jwt_config: &JwtConfig) -> Self {
        let codec = Arc::new(ClaimsCodec::new(&jwt_config.secret));
        Self {
            users,
            issuer: TokenIssuer::with_codec(codec.clone(), jwt_config),
            verifier: TokenVerifier::with_codec(codec),
        }
    }

    pub fn in_memory(jwt_config: &JwtConfig) -> Self {
        Self::new(Arc::new(InMemoryUserRepository::new()), jwt_config)
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("issuer", &self.issuer)
            .field("verifier", &self.verifier)
            .finish_non_exhaustive()
    }
}

/// Picks PostgreSQL when a database URL is configured, otherwise the in-memory store.
pub async fn init_app_state(
    jwt_config: &JwtConfig,
    server_config: &ServerConfig,
) -> Result<AppState, RepositoryError> {
    let users: Arc<dyn UserRepository> = match &server_config.database_url {
        Some(url) => {
            let pool = init_db_pool(url).await?;
            run_migrations(&pool).await?;
            Arc::new(PgUserRepository::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, users are kept in memory");
            Arc::new(InMemoryUserRepository::new())
        }
    };

    Ok(AppState::new(users, jwt_config))
}
