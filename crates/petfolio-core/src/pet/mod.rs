//! Pet profile management.
//!
//! This module defines the `PetRepository` port and the `PetService`
//! wrapping it with input validation.

pub mod repository;
pub mod service;

pub use repository::PetRepository;
pub use service::PetService;
