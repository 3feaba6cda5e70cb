//! Token payload structures.
//!
//! [`Claims`] is a single flat record carried by both token classes:
//!
//! - access tokens populate every identity field plus `iat`/`exp`
//! - refresh tokens carry only `iat`/`exp`; identity strings are empty and
//!   `user_type` is omitted from the payload
//!
//! Timestamps are Unix epoch seconds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Account class. Serialized as the exact strings `"ORDINARY"` / `"ADMIN"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Ordinary,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Ordinary => "ORDINARY",
            Role::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    /// Case-sensitive: `"admin"` is not a role.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ORDINARY" => Ok(Role::Ordinary),
            "ADMIN" => Ok(Role::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// The verified identity attributes a token is issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Stable public user identifier (not the storage record key)
    pub uid: String,
    pub user_type: Role,
}

/// Signed token payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<Role>,
    /// Issued-at timestamp (Unix seconds)
    pub iat: i64,
    /// Expiration timestamp (Unix seconds)
    pub exp: i64,
}

impl Claims {
    pub fn access(identity: &Identity, iat: i64, exp: i64) -> Self {
        Self {
            email: identity.email.clone(),
            first_name: identity.first_name.clone(),
            last_name: identity.last_name.clone(),
            uid: identity.uid.clone(),
            user_type: Some(identity.user_type),
            iat,
            exp,
        }
    }

    pub fn refresh(iat: i64, exp: i64) -> Self {
        Self {
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            uid: String::new(),
            user_type: None,
            iat,
            exp,
        }
    }

    /// Returns the identity if this is a full-claims (access) token.
    pub fn identity(&self) -> Option<Identity> {
        let user_type = self.user_type?;
        if self.uid.is_empty() {
            return None;
        }
        Some(Identity {
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            uid: self.uid.clone(),
            user_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity {
            email: "a@b.com".to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            uid: "u1".to_string(),
            user_type: Role::Admin,
        }
    }

    #[test]
    fn test_role_from_str_is_case_sensitive() {
        assert_eq!("ADMIN".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("ORDINARY".parse::<Role>(), Ok(Role::Ordinary));
        assert!("admin".parse::<Role>().is_err());
        assert!("USER".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), r#""ADMIN""#);
        assert_eq!(
            serde_json::to_string(&Role::Ordinary).unwrap(),
            r#""ORDINARY""#
        );
        assert!(serde_json::from_str::<Role>(r#""Admin""#).is_err());
    }

    #[test]
    fn test_access_claims_serialize() {
        let claims = Claims::access(&identity(), 1_000, 2_000);
        let serialized = serde_json::to_string(&claims).unwrap();
        assert!(serialized.contains(r#""email":"a@b.com""#));
        assert!(serialized.contains(r#""uid":"u1""#));
        assert!(serialized.contains(r#""user_type":"ADMIN""#));
        assert!(serialized.contains(r#""exp":2000"#));
    }

    #[test]
    fn test_refresh_claims_omit_user_type() {
        let claims = Claims::refresh(1_000, 2_000);
        let serialized = serde_json::to_string(&claims).unwrap();
        assert!(!serialized.contains("user_type"));
        assert!(claims.identity().is_none());
    }

    #[test]
    fn test_claims_deserialize_requires_timestamps() {
        let json = r#"{"email":"a@b.com","uid":"u1","user_type":"ADMIN","iat":1}"#;
        assert!(serde_json::from_str::<Claims>(json).is_err());
    }

    #[test]
    fn test_identity_roundtrip() {
        let claims = Claims::access(&identity(), 1_000, 2_000);
        assert_eq!(claims.identity(), Some(identity()));
    }
}
