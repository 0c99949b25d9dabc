//! Database layer - connection pool and the user store
//!
//! Every store operation is a single parameterized statement. No
//! transactions, no batching, no check-then-write.

pub mod pool;
pub mod users;

pub use pool::create_pool;
pub use users::{DbError, UserRepo, UserStore};
