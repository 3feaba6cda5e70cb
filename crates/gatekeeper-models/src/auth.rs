//! Signup and login DTOs.

use gatekeeper_auth::Role;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::users::UserResponse;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SignupRequest {
    #[validate(length(min = 2, max = 100, message = "first_name must be 2 to 100 characters"))]
    #[schema(example = "Ada")]
    pub first_name: String,
    #[validate(length(min = 2, max = 100, message = "last_name must be 2 to 100 characters"))]
    #[schema(example = "Lovelace")]
    pub last_name: String,
    #[validate(email(message = "email must be a valid email address"))]
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    #[schema(example = "password123")]
    pub password: String,
    #[validate(length(min = 1, message = "phone is required"))]
    #[schema(example = "+15550100")]
    pub phone: String,
    pub user_type: Role,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "email must be a valid email address"))]
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    #[schema(example = "password123")]
    pub password: String,
}

/// Returned by signup and login: the user view plus the freshly issued pair.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub token: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup() -> SignupRequest {
        SignupRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret1".to_string(),
            phone: "+15550100".to_string(),
            user_type: Role::Ordinary,
        }
    }

    #[test]
    fn test_valid_signup() {
        assert!(signup().validate().is_ok());
    }

    #[test]
    fn test_signup_field_rules() {
        let mut req = signup();
        req.first_name = "A".to_string();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("first_name"));

        let mut req = signup();
        req.email = "not-an-email".to_string();
        assert!(req.validate().is_err());

        let mut req = signup();
        req.password = "12345".to_string();
        assert!(req.validate().is_err());

        let mut req = signup();
        req.phone = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_signup_rejects_unknown_user_type() {
        let json = r#"{
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.com",
            "password": "secret1",
            "phone": "+15550100",
            "user_type": "admin"
        }"#;
        assert!(serde_json::from_str::<SignupRequest>(json).is_err());
    }
}
