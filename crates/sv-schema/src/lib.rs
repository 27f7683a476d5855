//! sv-schema - the schemaver migration engine
//!
//! Orchestrates the parsing layer and the executor seam: resolves the
//! version currently applied to a table (with a metadata-catalog
//! fallback) and executes only the chunks needed to advance it to a
//! definition file's final version. Version state lives in the table's
//! own comment attribute; no migration-ledger table is kept.

pub mod error;
mod resolver;
pub mod schema;

pub use error::{SchemaError, SchemaResult};
pub use schema::Schema;
