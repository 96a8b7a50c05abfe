//! Business logic and repository trait definitions for Petfolio.
//!
//! This crate defines the "ports" (repository traits) that the infrastructure
//! layer implements. It depends only on `petfolio-types` -- never on
//! `petfolio-infra` or any database/IO crate.

pub mod account;
pub mod chat;
pub mod llm;
pub mod pet;
