use std::sync::Arc;

use chrono::{DateTime, Utc};

use gatekeeper_config::JwtConfig;

use crate::claims::Claims;
use crate::codec::ClaimsCodec;
use crate::error::AuthError;

/// Checks structure, signature and expiry of a raw token.
///
/// Holds no mutable state; share one instance across all requests.
#[derive(Debug, Clone)]
pub struct TokenVerifier {
    codec: Arc<ClaimsCodec>,
}

impl TokenVerifier {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            codec: Arc::new(ClaimsCodec::new(&config.secret)),
        }
    }

    pub fn with_codec(codec: Arc<ClaimsCodec>) -> Self {
        Self { codec }
    }

    /// Returns the decoded claims, or which check failed.
    ///
    /// A token is expired only once `exp` is strictly before `now`; a token
    /// whose `exp` equals the current second is still accepted.
    pub fn verify(&self, raw_token: &str, now: DateTime<Utc>) -> Result<Claims, AuthError> {
        let claims = self.codec.decode(raw_token).inspect_err(|e| {
            tracing::debug!(error = %e, "token rejected");
        })?;

        if claims.exp < now.timestamp() {
            tracing::debug!(exp = claims.exp, "token expired");
            return Err(AuthError::Expired);
        }

        Ok(claims)
    }
}
