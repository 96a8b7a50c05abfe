//! Shared domain types for Petfolio.
//!
//! This crate contains the domain types used across the Petfolio backend:
//! user accounts, pet profiles, chat sessions/messages, gateway types,
//! and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror,
//! and secrecy for plaintext passwords in flight.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
pub mod pet;
pub mod user;
