//! Signed Bearer Tokens
//!
//! Stateless bearer tokens carrying a user id and an expiry timestamp,
//! signed with HMAC-SHA256. Wire format:
//!
//! ```text
//! {user_uuid}.{expires_at_ms}.{base64url(hmac_sha256(secret, "{user_uuid}.{expires_at_ms}"))}
//! ```
//!
//! The signature covers the id and expiry, so neither can be altered
//! without invalidating the token. Verification is constant-time.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

/// Token verification errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Token does not have the expected `id.expiry.signature` structure
    #[error("Token is malformed")]
    Malformed,

    /// Signature does not match the payload
    #[error("Token signature is invalid")]
    InvalidSignature,

    /// Token expiry timestamp has passed
    #[error("Token has expired")]
    Expired,
}

/// Generate a random 32-byte signing secret
pub fn generate_secret() -> [u8; 32] {
    use rand::RngCore;
    let mut secret = [0u8; 32];
    rand::rngs::OsRng.fill_bytes(&mut secret);
    secret
}

/// Issue a signed token for `user_id`, valid for `ttl` from now
pub fn issue(secret: &[u8; 32], user_id: Uuid, ttl: Duration) -> String {
    let expires_at_ms = now_ms() + ttl.as_millis() as i64;
    let payload = format!("{}.{}", user_id, expires_at_ms);
    format!("{}.{}", payload, sign(secret, payload.as_bytes()))
}

/// Verify a token and return the embedded user id
///
/// Checks the signature before the expiry, so a tampered-but-expired
/// token reports `InvalidSignature` rather than leaking validity info.
pub fn verify(secret: &[u8; 32], token: &str) -> Result<Uuid, TokenError> {
    let mut parts = token.splitn(3, '.');
    let (Some(id_part), Some(exp_part), Some(sig_part)) =
        (parts.next(), parts.next(), parts.next())
    else {
        return Err(TokenError::Malformed);
    };

    let user_id = Uuid::parse_str(id_part).map_err(|_| TokenError::Malformed)?;
    let expires_at_ms: i64 = exp_part.parse().map_err(|_| TokenError::Malformed)?;

    let signature = URL_SAFE_NO_PAD
        .decode(sig_part)
        .map_err(|_| TokenError::Malformed)?;

    let payload = format!("{}.{}", id_part, exp_part);
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(payload.as_bytes());
    // verify_slice is constant-time
    mac.verify_slice(&signature)
        .map_err(|_| TokenError::InvalidSignature)?;

    if now_ms() >= expires_at_ms {
        return Err(TokenError::Expired);
    }

    Ok(user_id)
}

fn sign(secret: &[u8; 32], payload: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(payload);
    URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
}

fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(7 * 24 * 3600);

    #[test]
    fn test_issue_verify_roundtrip() {
        let secret = generate_secret();
        let user_id = Uuid::new_v4();

        let token = issue(&secret, user_id, TTL);
        let verified = verify(&secret, &token).unwrap();

        assert_eq!(verified, user_id);
    }

    #[test]
    fn test_token_structure() {
        let secret = generate_secret();
        let token = issue(&secret, Uuid::new_v4(), TTL);
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let secret = generate_secret();
        let other = generate_secret();
        let token = issue(&secret, Uuid::new_v4(), TTL);

        assert_eq!(verify(&other, &token), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_tampered_expiry_rejected() {
        let secret = generate_secret();
        let token = issue(&secret, Uuid::new_v4(), TTL);

        let mut parts: Vec<&str> = token.split('.').collect();
        let bumped = format!("{}9", parts[1]);
        parts[1] = &bumped;
        let tampered = parts.join(".");

        assert_eq!(
            verify(&secret, &tampered),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_tampered_user_id_rejected() {
        let secret = generate_secret();
        let token = issue(&secret, Uuid::new_v4(), TTL);

        let mut parts: Vec<&str> = token.split('.').collect();
        let other_id = Uuid::new_v4().to_string();
        parts[0] = &other_id;
        let tampered = parts.join(".");

        assert_eq!(
            verify(&secret, &tampered),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_expired_token_rejected() {
        let secret = generate_secret();
        let token = issue(&secret, Uuid::new_v4(), Duration::ZERO);

        std::thread::sleep(Duration::from_millis(5));

        assert_eq!(verify(&secret, &token), Err(TokenError::Expired));
    }

    #[test]
    fn test_malformed_tokens_rejected() {
        let secret = generate_secret();

        assert_eq!(verify(&secret, ""), Err(TokenError::Malformed));
        assert_eq!(verify(&secret, "abc"), Err(TokenError::Malformed));
        assert_eq!(verify(&secret, "a.b"), Err(TokenError::Malformed));
        assert_eq!(
            verify(&secret, "not-a-uuid.123.c2ln"),
            Err(TokenError::Malformed)
        );

        let bad_expiry = format!("{}.notanumber.c2ln", Uuid::new_v4());
        assert_eq!(verify(&secret, &bad_expiry), Err(TokenError::Malformed));

        let bad_b64 = format!("{}.123.!!not-base64!!", Uuid::new_v4());
        assert_eq!(verify(&secret, &bad_b64), Err(TokenError::Malformed));
    }

    #[test]
    fn test_generate_secret_not_all_zeros() {
        let secret = generate_secret();
        assert!(secret.iter().any(|&b| b != 0));
    }
}
