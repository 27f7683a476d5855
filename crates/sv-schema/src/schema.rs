//! The migration engine entry points.

use crate::error::{SchemaError, SchemaResult};
use crate::resolver;
use std::path::Path;
use sv_core::{SchemaDefinition, TableName, VersionLabel};
use sv_db::SqlExecutor;

/// Versioned schema-migration engine.
///
/// Constructed over a single injected executor; the engine performs no
/// connection management and takes no locks of its own. All work is
/// synchronous on the caller's thread.
pub struct Schema<E: SqlExecutor> {
    db: E,
}

impl<E: SqlExecutor> Schema<E> {
    /// Create an engine over a live connection handle.
    pub fn new(db: E) -> Self {
        Self { db }
    }

    /// Borrow the underlying executor.
    pub fn executor(&self) -> &E {
        &self.db
    }

    /// Read a definition file, parse it and apply it in one call.
    pub fn load_file(&self, path: impl AsRef<Path>) -> SchemaResult<()> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let definition = sv_core::parse(&text)?;
        self.apply(&definition)
    }

    /// Apply a parsed definition: execute every chunk whose version
    /// exceeds the table's currently applied version, in file order.
    ///
    /// The closing structural statement of each chunk persists the new
    /// version as the table's comment attribute; the engine keeps no
    /// ledger of its own, so the version is read back fresh before every
    /// chunk. The first failing statement aborts the run; chunks already
    /// executed stay applied.
    pub fn apply(&self, definition: &SchemaDefinition) -> SchemaResult<()> {
        for chunk in definition {
            let current = self.current_table_version(&chunk.table)?;
            if let Some(current) = &current {
                if *current >= chunk.version {
                    log::debug!(
                        "table {} is at version {}, skipping chunk {}",
                        chunk.table,
                        current,
                        chunk.version
                    );
                    continue;
                }
            }

            log::info!(
                "advancing table {} to version {} ({} statement(s))",
                chunk.table,
                chunk.version,
                chunk.statement_count()
            );
            for statement in &chunk.statements {
                self.db.execute(statement)?;
            }
        }
        Ok(())
    }

    /// Version currently applied to `table`, or `None` if the table
    /// does not exist.
    ///
    /// Fails with [`SchemaError::MissingVersion`] when the table exists
    /// but carries no recoverable marker. Exposed for external tooling
    /// and tests; `apply` uses the same resolution path.
    pub fn current_table_version(
        &self,
        table: &TableName,
    ) -> SchemaResult<Option<VersionLabel>> {
        resolver::current_version(&self.db, table)
    }
}

#[cfg(test)]
#[path = "schema_test.rs"]
mod tests;
