//! userctl-server: HTTP CRUD service over the `users` table
//!
//! Five routes map one-to-one onto five single-statement store operations.
//! The pool is built by the caller and injected through [`http::run_server`].

pub mod db;
pub mod http;
pub mod models;

#[cfg(test)]
pub(crate) mod testing;

pub use db::{create_pool, DbError, UserRepo, UserStore};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use models::User;
