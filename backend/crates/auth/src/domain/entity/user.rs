//! User Entity
//!
//! Core user profile entity containing non-sensitive user data.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{email::Email, phone::Phone};

/// User entity
///
/// Contains public user profile information.
/// The password hash lives in the Credential entity.
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Email address (unique, used for login)
    pub email: Email,
    /// Display name
    pub name: String,
    /// Contact phone number
    pub phone: Phone,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(email: Email, name: String, phone: Phone) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            email,
            name,
            phone,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user() {
        let email = Email::new("buyer@example.com").unwrap();
        let phone = Phone::new("+91 98765 43210").unwrap();
        let user = User::new(email, "Asha".to_string(), phone);

        assert_eq!(user.email.as_str(), "buyer@example.com");
        assert_eq!(user.name, "Asha");
        assert_eq!(user.created_at, user.updated_at);
    }
}
