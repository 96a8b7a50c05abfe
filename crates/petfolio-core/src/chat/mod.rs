//! Chat session management.
//!
//! This module defines the `ChatRepository` port, the per-session turn
//! lock, the outbound context window, and the `ChatService` orchestrating
//! turns, snapshot saves, and history listings.

pub mod context_window;
pub mod repository;
pub mod service;
pub mod turn_lock;

pub use context_window::ContextWindow;
pub use repository::ChatRepository;
pub use service::ChatService;
pub use turn_lock::TurnLocks;
