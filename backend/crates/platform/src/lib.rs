//! Platform - Shared technical services
//!
//! Cryptographic and HTTP plumbing used by the feature crates:
//! - `password` - Argon2id hashing with zeroization and NIST-style policy
//! - `token` - HMAC-SHA256 signed bearer tokens (user id + expiry)
//! - `bearer` - `Authorization: Bearer` header extraction

pub mod bearer;
pub mod password;
pub mod token;
