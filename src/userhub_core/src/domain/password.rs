//! Salted one-way password hashing used by the use cases.

use argon2::{
    Argon2, PasswordVerifier,
    password_hash::{PasswordHash, PasswordHasher, SaltString, rand_core},
};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Password hashing failed: {0}")]
pub struct PasswordHashError(String);

/// Hash a plaintext password with a fresh random salt.
pub fn hash_password(plain: &str) -> Result<String, PasswordHashError> {
    let salt = SaltString::generate(&mut rand_core::OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| PasswordHashError(e.to_string()))?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored hash.
///
/// Returns `false` both for a mismatch and for a malformed stored hash, so
/// callers cannot distinguish the two.
pub fn verify_password(plain: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok()
}
