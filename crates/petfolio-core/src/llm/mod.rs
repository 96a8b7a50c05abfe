//! LLM gateway abstraction.

pub mod gateway;

pub use gateway::ChatGateway;
