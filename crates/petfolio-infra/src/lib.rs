//! Infrastructure implementations for Petfolio.
//!
//! Provides the concrete adapters behind the ports defined in
//! `petfolio-core`: SQLite repositories, the argon2 password hasher,
//! and the HTTP chat gateway.

pub mod config;
pub mod crypto;
pub mod llm;
pub mod sqlite;
