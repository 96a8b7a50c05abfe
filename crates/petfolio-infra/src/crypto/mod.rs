//! Cryptographic operations for Petfolio.
//!
//! - `password`: argon2id password hashing for account credentials

pub mod password;
