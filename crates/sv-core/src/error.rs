//! Error types for sv-core

use thiserror::Error;

/// Parse errors for versioned definition files
#[derive(Error, Debug)]
pub enum ParseError {
    /// P001: File contains statements but no version marker at all
    #[error("[P001] No version marker found in definition file")]
    NoVersionMarker,

    /// P002: Statements left after the last version marker
    #[error("[P002] {count} statement(s) after the last version marker; every statement must belong to a versioned chunk")]
    UnversionedTrailer { count: usize },

    /// P003: Chunk versions for a table must strictly increase in file order
    #[error("[P003] Version \"{next}\" for table \"{table}\" does not increase over \"{prev}\"")]
    NonMonotonicVersion {
        table: String,
        prev: String,
        next: String,
    },

    /// P004: Structural statement carries a marker but no parsable table name
    #[error("[P004] Cannot extract table name from versioned statement: {statement}")]
    UnparsableTarget { statement: String },
}

/// Result type alias for ParseError
pub type ParseResult<T> = Result<T, ParseError>;
