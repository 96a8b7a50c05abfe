//! Request extractors for the REST API.

pub mod body;
pub mod query;
