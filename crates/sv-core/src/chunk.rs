//! Version chunks - the parsed data model.

use crate::table_name::TableName;
use crate::version::VersionLabel;
use serde::{Deserialize, Serialize};

/// One unit of migration work: the statements that advance a table to
/// one version.
///
/// The closing statement is always a structural statement carrying the
/// `version <label>` comment attribute; executing it persists the new
/// version on the table itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionChunk {
    /// Version label extracted from the closing statement's comment attribute
    pub version: VersionLabel,
    /// Table the chunk's statements target
    pub table: TableName,
    /// Raw SQL statements in exact file order, closing statement last
    pub statements: Vec<String>,
}

impl VersionChunk {
    /// Number of statements in this chunk.
    pub fn statement_count(&self) -> usize {
        self.statements.len()
    }
}

/// The full ordered sequence of chunks parsed from one definition file.
///
/// Transient: produced by [`parse`](crate::parser::parse), consumed by
/// one apply pass, then discarded. File order is preserved exactly and
/// is relied upon to replay history deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDefinition {
    /// Chunks in file order
    pub chunks: Vec<VersionChunk>,
}

impl SchemaDefinition {
    /// Number of chunks in the definition.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Whether the definition contains no chunks.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Iterate over chunks in file order.
    pub fn iter(&self) -> std::slice::Iter<'_, VersionChunk> {
        self.chunks.iter()
    }

    /// Distinct tables touched by the definition, in first-seen order.
    pub fn tables(&self) -> Vec<&TableName> {
        let mut tables: Vec<&TableName> = Vec::new();
        for chunk in &self.chunks {
            if !tables.contains(&&chunk.table) {
                tables.push(&chunk.table);
            }
        }
        tables
    }

    /// Final version for `table`, i.e. the version of its last chunk.
    pub fn final_version(&self, table: &TableName) -> Option<&VersionLabel> {
        self.chunks
            .iter()
            .rev()
            .find(|c| &c.table == table)
            .map(|c| &c.version)
    }
}

impl<'a> IntoIterator for &'a SchemaDefinition {
    type Item = &'a VersionChunk;
    type IntoIter = std::slice::Iter<'a, VersionChunk>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.iter()
    }
}
