//! HTTP/REST API layer for Petfolio.
//!
//! Axum-based REST API at `/api/` with CORS support and request tracing.
//! Response bodies keep the wire casing and envelope shapes that existing
//! clients depend on.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
