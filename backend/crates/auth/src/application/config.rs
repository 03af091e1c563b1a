//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

/// Auth application configuration
///
/// There is deliberately no `Default` with a fixed secret: the signing
/// secret must be supplied (or explicitly randomized for development).
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Bearer-token signing secret (32 bytes, HMAC-SHA256)
    pub token_secret: [u8; 32],
    /// Token lifetime (1 week)
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl AuthConfig {
    /// Create config with the given signing secret
    pub fn new(token_secret: [u8; 32]) -> Self {
        Self {
            token_secret,
            token_ttl: Duration::from_secs(7 * 24 * 3600), // 1 week
            password_pepper: None,
        }
    }

    /// Create config with a random signing secret (for development)
    ///
    /// Tokens do not survive a restart with this config.
    pub fn with_random_secret() -> Self {
        Self::new(platform::token::generate_secret())
    }

    /// Get token TTL in milliseconds
    pub fn token_ttl_ms(&self) -> i64 {
        self.token_ttl.as_millis() as i64
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttl_is_one_week() {
        let config = AuthConfig::with_random_secret();
        assert_eq!(config.token_ttl_ms(), 7 * 24 * 3600 * 1000);
    }

    #[test]
    fn test_random_secrets_differ() {
        let a = AuthConfig::with_random_secret();
        let b = AuthConfig::with_random_secret();
        assert_ne!(a.token_secret, b.token_secret);
    }
}
