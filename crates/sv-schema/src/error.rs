//! Error types for sv-schema

use std::path::PathBuf;
use sv_core::{ParseError, TableName};
use sv_db::DbError;
use thiserror::Error;

/// Migration engine errors
///
/// Executor and parse errors pass through untranslated; the engine adds
/// no wrapping layer of its own. `MissingVersion` is the engine's one
/// distinct error kind: the table exists but carries no recoverable
/// version marker, which means it was created or modified outside the
/// migration convention and needs human intervention.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// Table exists but no version marker could be recovered
    #[error("Missing version identifier in table \"{table}\".")]
    MissingVersion { table: TableName },

    /// Executor failure, surfaced verbatim
    #[error(transparent)]
    Db(#[from] DbError),

    /// Definition file could not be parsed into version chunks
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Definition file could not be read
    #[error("Failed to read definition file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for SchemaError
pub type SchemaResult<T> = Result<T, SchemaError>;
