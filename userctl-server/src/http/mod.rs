//! HTTP server layer
//!
//! Axum server with:
//! - Request tracing
//! - Fixed `Server` response header
//! - Graceful shutdown
//! - JSON `{message}` error bodies

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::{ApiError, ErrorBody};
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
