//! HTTP boundary for the lipi transliteration engine.
//!
//! A thin axum service over [`lipi_core::transliterate`]: one POST route,
//! permissive CORS, and a two-case error taxonomy (invalid request vs.
//! internal failure). The engine itself never fails.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{app, start_server, ServerConfig};
