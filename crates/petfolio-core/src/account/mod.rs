//! Account registration, login, and profile management.
//!
//! This module defines the `UserRepository` and `PasswordHasher` ports and
//! the `AccountService` that orchestrates them.

pub mod password;
pub mod repository;
pub mod service;

pub use password::{PasswordHashError, PasswordHasher};
pub use repository::UserRepository;
pub use service::AccountService;
