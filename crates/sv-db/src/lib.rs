//! sv-db - database abstraction layer for schemaver
//!
//! This crate provides the `SqlExecutor` trait the engine is built
//! against, its error type, and an in-memory MySQL-flavoured backend
//! used by tests and the CLI's rehearsal mode.

pub mod error;
pub mod executor;
pub mod memory;

pub use error::{DbError, DbResult};
pub use executor::{Row, SqlExecutor};
pub use memory::MemoryDb;
