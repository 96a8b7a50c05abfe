//! Argon2id password hashing for account credentials.
//!
//! Implements the `PasswordHasher` trait from `petfolio-core` using the
//! `argon2` crate (RustCrypto ecosystem) with its default parameters
//! (argon2id, 19 MiB memory, 2 iterations). Hashes are stored as PHC
//! strings, so the salt and parameters travel with the hash and
//! verification needs no extra state.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher as _, PasswordVerifier as _};

use petfolio_core::account::password::{PasswordHashError, PasswordHasher};

/// Argon2id implementation of `PasswordHasher`.
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    /// Create a new hasher.
    pub fn new() -> Self {
        Self
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, PasswordHashError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordHashError(e.to_string()))
    }

    fn verify(&self, password: &str, stored_hash: &str) -> Result<bool, PasswordHashError> {
        let parsed =
            PasswordHash::new(stored_hash).map_err(|e| PasswordHashError(e.to_string()))?;
        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(PasswordHashError(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hasher = Argon2PasswordHasher::new();
        let hash = hasher.hash("correct horse battery staple").unwrap();

        assert!(hasher.verify("correct horse battery staple", &hash).unwrap());
        assert!(!hasher.verify("wrong password", &hash).unwrap());
    }

    #[test]
    fn test_hash_is_phc_string() {
        let hasher = Argon2PasswordHasher::new();
        let hash = hasher.hash("pw1").unwrap();
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn test_same_password_different_salts() {
        let hasher = Argon2PasswordHasher::new();
        let hash1 = hasher.hash("pw1").unwrap();
        let hash2 = hasher.hash("pw1").unwrap();

        // Random salts make hashes differ, both still verify
        assert_ne!(hash1, hash2);
        assert!(hasher.verify("pw1", &hash1).unwrap());
        assert!(hasher.verify("pw1", &hash2).unwrap());
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        let hasher = Argon2PasswordHasher::new();
        let result = hasher.verify("pw1", "not-a-phc-string");
        assert!(result.is_err());
    }
}
