//! sv-core - parsing layer for schemaver
//!
//! This crate provides the versioned-file parser: it splits a SQL
//! definition file into statements and groups them into version chunks,
//! each closed by a structural statement carrying a `version <label>`
//! comment attribute. Pure functions, no I/O.

pub mod chunk;
pub mod error;
pub mod marker;
pub mod parser;
pub mod table_name;
pub mod version;

pub use chunk::{SchemaDefinition, VersionChunk};
pub use error::{ParseError, ParseResult};
pub use marker::{comment_marker, is_structural, structural_target, version_marker};
pub use parser::parse;
pub use table_name::TableName;
pub use version::VersionLabel;
