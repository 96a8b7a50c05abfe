//! LLM gateway implementations.

pub mod ollama;

pub use ollama::OllamaGateway;
