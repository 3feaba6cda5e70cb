use std::env;
use std::fmt;
use std::sync::Arc;

use crate::error::ConfigError;

pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 24 * 60 * 60;
pub const DEFAULT_REFRESH_TOKEN_EXPIRY: i64 = 168 * 60 * 60;
/// Upper bound for either lifetime (10 years).
pub const MAX_TOKEN_EXPIRY: i64 = 10 * 365 * 24 * 60 * 60;

/// Process-wide HMAC secret used to sign and verify every token.
///
/// Cheap to clone; the bytes are shared and never mutated after load.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningKey(Arc<[u8]>);

impl SigningKey {
    pub fn new(secret: impl AsRef<[u8]>) -> Result<Self, ConfigError> {
        let bytes = secret.as_ref();
        if bytes.is_empty() {
            return Err(ConfigError::Empty("JWT_SECRET"));
        }
        Ok(Self(Arc::from(bytes)))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SigningKey(<{} bytes redacted>)", self.0.len())
    }
}

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: SigningKey,
    /// Access token lifetime in seconds
    pub access_token_expiry: i64,
    /// Refresh token lifetime in seconds
    pub refresh_token_expiry: i64,
}

impl JwtConfig {
    /// Builds a config with the default 24h access / 168h refresh lifetimes.
    pub fn new(secret: impl AsRef<[u8]>) -> Result<Self, ConfigError> {
        Ok(Self {
            secret: SigningKey::new(secret)?,
            access_token_expiry: DEFAULT_ACCESS_TOKEN_EXPIRY,
            refresh_token_expiry: DEFAULT_REFRESH_TOKEN_EXPIRY,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads `JWT_SECRET` (falling back to `SECRET_KEY`), `JWT_ACCESS_EXPIRY`
    /// and `JWT_REFRESH_EXPIRY` through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("JWT_SECRET")
            .or_else(|| lookup("SECRET_KEY"))
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let access_token_expiry =
            parse_seconds(&lookup, "JWT_ACCESS_EXPIRY", DEFAULT_ACCESS_TOKEN_EXPIRY)?;
        let refresh_token_expiry =
            parse_seconds(&lookup, "JWT_REFRESH_EXPIRY", DEFAULT_REFRESH_TOKEN_EXPIRY)?;

        if refresh_token_expiry < access_token_expiry {
            return Err(ConfigError::Invalid {
                key: "JWT_REFRESH_EXPIRY",
                reason: "must not be shorter than JWT_ACCESS_EXPIRY".to_string(),
            });
        }

        Ok(Self {
            secret: SigningKey::new(secret.trim())?,
            access_token_expiry,
            refresh_token_expiry,
        })
    }
}

fn parse_seconds<F>(lookup: &F, key: &'static str, default: i64) -> Result<i64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };

    let seconds = raw.trim().parse::<i64>().map_err(|e| ConfigError::Invalid {
        key,
        reason: e.to_string(),
    })?;

    if seconds <= 0 {
        return Err(ConfigError::Invalid {
            key,
            reason: "must be a positive number of seconds".to_string(),
        });
    }

    if seconds > MAX_TOKEN_EXPIRY {
        return Err(ConfigError::Invalid {
            key,
            reason: format!("must not exceed {MAX_TOKEN_EXPIRY} seconds"),
        });
    }

    Ok(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_applied() {
        let config = JwtConfig::from_lookup(lookup_from(&[("JWT_SECRET", "s3cret")])).unwrap();
        assert_eq!(config.secret.as_bytes(), b"s3cret");
        assert_eq!(config.access_token_expiry, 86_400);
        assert_eq!(config.refresh_token_expiry, 604_800);
    }

    #[test]
    fn test_missing_secret_is_error() {
        let err = JwtConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("JWT_SECRET"));
    }

    #[test]
    fn test_empty_secret_is_error() {
        let err = JwtConfig::from_lookup(lookup_from(&[("JWT_SECRET", "   ")])).unwrap_err();
        assert_eq!(err, ConfigError::Empty("JWT_SECRET"));
    }

    #[test]
    fn test_secret_key_fallback() {
        let config = JwtConfig::from_lookup(lookup_from(&[("SECRET_KEY", "legacy")])).unwrap();
        assert_eq!(config.secret.as_bytes(), b"legacy");
    }

    #[test]
    fn test_expiry_overrides() {
        let config = JwtConfig::from_lookup(lookup_from(&[
            ("JWT_SECRET", "s3cret"),
            ("JWT_ACCESS_EXPIRY", "60"),
            ("JWT_REFRESH_EXPIRY", "120"),
        ]))
        .unwrap();
        assert_eq!(config.access_token_expiry, 60);
        assert_eq!(config.refresh_token_expiry, 120);
    }

    #[test]
    fn test_invalid_expiry_rejected() {
        for value in ["abc", "0", "-5"] {
            let result = JwtConfig::from_lookup(lookup_from(&[
                ("JWT_SECRET", "s3cret"),
                ("JWT_ACCESS_EXPIRY", value),
            ]));
            assert!(matches!(
                result,
                Err(ConfigError::Invalid {
                    key: "JWT_ACCESS_EXPIRY",
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_expiry_upper_bound() {
        let max = MAX_TOKEN_EXPIRY.to_string();
        let config = JwtConfig::from_lookup(lookup_from(&[
            ("JWT_SECRET", "s3cret"),
            ("JWT_ACCESS_EXPIRY", &max),
            ("JWT_REFRESH_EXPIRY", &max),
        ]))
        .unwrap();
        assert_eq!(config.refresh_token_expiry, MAX_TOKEN_EXPIRY);

        let too_long = (MAX_TOKEN_EXPIRY + 1).to_string();
        for (key, value) in [
            ("JWT_ACCESS_EXPIRY", too_long.as_str()),
            ("JWT_REFRESH_EXPIRY", "9223372036854775807"),
        ] {
            let result =
                JwtConfig::from_lookup(lookup_from(&[("JWT_SECRET", "s3cret"), (key, value)]));
            assert!(
                matches!(result, Err(ConfigError::Invalid { key: k, .. }) if k == key),
                "{key}={value}"
            );
        }
    }

    #[test]
    fn test_refresh_shorter_than_access_rejected() {
        let result = JwtConfig::from_lookup(lookup_from(&[
            ("JWT_SECRET", "s3cret"),
            ("JWT_ACCESS_EXPIRY", "3600"),
            ("JWT_REFRESH_EXPIRY", "60"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = JwtConfig::new("super-secret-value").unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret-value"));
        assert!(debug.contains("redacted"));
    }
}
