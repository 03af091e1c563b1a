//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::user::User;

// ============================================================================
// Sign Up / Log In
// ============================================================================

/// Sign up request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: String,
}

/// Log in request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogInRequest {
    pub email: String,
    pub password: String,
}

/// Token + user response for both signup and login
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

// ============================================================================
// User (public fields only - never the password hash)
// ============================================================================

/// Public user fields
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub phone: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: *user.user_id.as_uuid(),
            email: user.email.as_str().to_string(),
            name: user.name.clone(),
            phone: user.phone.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{email::Email, phone::Phone};

    #[test]
    fn test_user_response_shape() {
        let user = User::new(
            Email::new("seller@example.com").unwrap(),
            "Ravi".to_string(),
            Phone::new("9876543210").unwrap(),
        );
        let resp = UserResponse::from(&user);
        let json = serde_json::to_value(&resp).unwrap();

        assert_eq!(json["email"], "seller@example.com");
        assert_eq!(json["name"], "Ravi");
        assert_eq!(json["phone"], "9876543210");
        // The hash must never appear in responses
        assert!(json.get("password").is_none());
        assert!(json.get("passwordHash").is_none());
    }

    #[test]
    fn test_signup_request_camel_case() {
        let req: SignUpRequest = serde_json::from_str(
            r#"{"email":"a@b.co","password":"longenough","name":"A","phone":"1234567"}"#,
        )
        .unwrap();
        assert_eq!(req.email, "a@b.co");
    }
}
