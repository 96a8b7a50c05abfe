//! PasswordHasher trait for credential hashing.
//!
//! Defined in petfolio-core so the account service can hash and verify
//! passwords without coupling to a specific algorithm. The
//! `Argon2PasswordHasher` adapter lives in petfolio-infra.

/// Error from hashing or verifying a password.
#[derive(Debug, thiserror::Error)]
#[error("password hash error: {0}")]
pub struct PasswordHashError(pub String);

/// Abstraction over password hashing and verification.
///
/// `hash` produces a self-describing hash string (algorithm, parameters,
/// and salt encoded together) that `verify` can check a candidate against.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plain-text password into a storable hash string.
    fn hash(&self, password: &str) -> Result<String, PasswordHashError>;

    /// Check a plain-text password against a stored hash string.
    ///
    /// Returns `Ok(false)` for a well-formed hash that does not match;
    /// errors are reserved for malformed hashes.
    fn verify(&self, password: &str, stored_hash: &str) -> Result<bool, PasswordHashError>;
}
