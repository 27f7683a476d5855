//! Error types for sv-db

use thiserror::Error;

/// Database operation errors
///
/// `Execution` carries the server's message and error code verbatim; the
/// engine surfaces it to callers without wrapping or rewording.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DbError {
    /// Execution failure reported by the server (syntax error, constraint
    /// violation, driver error). Display is the original message.
    #[error("{message}")]
    Execution { code: u32, message: String },

    /// Table does not exist. A distinct variant so callers can treat a
    /// missing table as a normal outcome rather than a failure.
    #[error("Table '{0}' doesn't exist")]
    TableNotFound(String),
}

impl DbError {
    /// Server error code: `Execution` codes pass through, a missing
    /// table reports the MySQL code 1146.
    pub fn code(&self) -> u32 {
        match self {
            DbError::Execution { code, .. } => *code,
            DbError::TableNotFound(_) => 1146,
        }
    }
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;
