use crate::types::error::AppError;
use bcrypt::{hash, verify, DEFAULT_COST};

pub fn hash_password(plaintext: &str) -> Result<String, AppError> {
    Ok(hash(plaintext, DEFAULT_COST)?)
}

/// Recomputes the hash with the salt/cost embedded in `stored_hash` and
/// compares in constant time. True iff the plaintext matches; a hash that
/// bcrypt cannot parse is an error, not a mismatch.
pub fn verify_password(plaintext: &str, stored_hash: &str) -> Result<bool, AppError> {
    Ok(verify(plaintext, stored_hash)?)
}
