//! Live table version resolution.
//!
//! The applied version is stored in the table's own comment attribute.
//! Primary strategy: reconstruct the full definition (`SHOW CREATE
//! TABLE`) and parse the trailing comment attribute. If the definition
//! cannot be read or carries no marker, fall back to the metadata
//! catalog's table-comment column. Only when both strategies fail on a
//! table known to exist does resolution raise `MissingVersion`.

use crate::error::{SchemaError, SchemaResult};
use sv_core::{comment_marker, version_marker, TableName, VersionLabel};
use sv_db::{DbError, SqlExecutor};

/// Primary resolution query: reconstruct the table definition.
pub(crate) fn show_create_query(table: &TableName) -> String {
    format!("SHOW CREATE TABLE `{table}`")
}

/// Fallback resolution query: read the comment from the metadata catalog.
pub(crate) fn table_comment_query(table: &TableName) -> String {
    format!(
        "SELECT TABLE_COMMENT FROM INFORMATION_SCHEMA.TABLES WHERE TABLE_NAME = \"{table}\" LIMIT 1"
    )
}

/// Resolve the version currently applied to `table`.
///
/// `Ok(None)` means the table does not exist, which is a normal outcome
/// driving full-from-scratch application. State is computed fresh on
/// every call; nothing is cached.
pub(crate) fn current_version<E: SqlExecutor>(
    db: &E,
    table: &TableName,
) -> SchemaResult<Option<VersionLabel>> {
    let mut known_to_exist = false;

    match db.query(&show_create_query(table)) {
        Ok(rows) => {
            if let Some(row) = rows.first() {
                known_to_exist = true;
                // MySQL reports (Table, Create Table); take the definition cell
                let definition = row
                    .get(1)
                    .or_else(|| row.first())
                    .and_then(|cell| cell.as_deref())
                    .unwrap_or_default();
                if let Some(version) = version_marker(definition) {
                    return Ok(Some(version));
                }
            }
        }
        Err(DbError::TableNotFound(_)) => return Ok(None),
        Err(err) => {
            // not proof of absence; let the fallback decide
            log::debug!("primary version query failed for {table}: {err}");
        }
    }

    match db.query(&table_comment_query(table)) {
        Ok(rows) => match rows.first().and_then(|row| row.first()) {
            Some(cell) => {
                let comment = cell.as_deref().unwrap_or_default();
                match comment_marker(comment) {
                    Some(version) => Ok(Some(version)),
                    None => Err(SchemaError::MissingVersion {
                        table: table.clone(),
                    }),
                }
            }
            // zero rows: the catalog says the table does not exist
            None if known_to_exist => Err(SchemaError::MissingVersion {
                table: table.clone(),
            }),
            None => Ok(None),
        },
        Err(err) if known_to_exist => {
            log::debug!("fallback version query failed for {table}: {err}");
            Err(SchemaError::MissingVersion {
                table: table.clone(),
            })
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod tests;
