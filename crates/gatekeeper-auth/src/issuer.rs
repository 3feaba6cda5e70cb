use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use gatekeeper_config::JwtConfig;

use crate::claims::{Claims, Identity};
use crate::codec::ClaimsCodec;
use crate::error::AuthError;

/// One access token and one refresh token signed at the same instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone)]
pub struct TokenIssuer {
    codec: Arc<ClaimsCodec>,
    access_token_expiry: i64,
    refresh_token_expiry: i64,
}

impl TokenIssuer {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            codec: Arc::new(ClaimsCodec::new(&config.secret)),
            access_token_expiry: config.access_token_expiry,
            refresh_token_expiry: config.refresh_token_expiry,
        }
    }

    /// Shares an existing codec, so issuer and verifier hold one copy of the keys.
    pub fn with_codec(codec: Arc<ClaimsCodec>, config: &JwtConfig) -> Self {
        Self {
            codec,
            access_token_expiry: config.access_token_expiry,
            refresh_token_expiry: config.refresh_token_expiry,
        }
    }

    pub fn access_token_expiry(&self) -> i64 {
        self.access_token_expiry
    }

    pub fn refresh_token_expiry(&self) -> i64 {
        self.refresh_token_expiry
    }

    /// Mints a fresh pair for `identity`.
    ///
    /// The access token carries the full identity and expires
    /// `access_token_expiry` seconds after `now`. The refresh token carries
    /// only its timestamps. Persisting the pair is the caller's job.
    pub fn issue(&self, identity: &Identity, now: DateTime<Utc>) -> Result<TokenPair, AuthError> {
        let iat = now.timestamp();

        let access = Claims::access(identity, iat, expires_at(iat, self.access_token_expiry)?);
        let refresh = Claims::refresh(iat, expires_at(iat, self.refresh_token_expiry)?);

        let access_token = self.sign(&access)?;
        let refresh_token = self.sign(&refresh)?;

        tracing::debug!(uid = %identity.uid, user_type = %identity.user_type, "issued token pair");

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    fn sign(&self, claims: &Claims) -> Result<String, AuthError> {
        self.codec.encode(claims).inspect_err(|e| {
            tracing::error!(error = %e, "token signing failed");
        })
    }
}

fn expires_at(iat: i64, lifetime: i64) -> Result<i64, AuthError> {
    iat.checked_add(lifetime).ok_or_else(|| {
        tracing::error!(iat, lifetime, "token lifetime overflows the expiry timestamp");
        AuthError::Signing("token lifetime out of range".to_string())
    })
}
