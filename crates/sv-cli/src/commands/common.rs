//! Shared helpers for command implementations

use anyhow::{Context, Result};
use sv_core::SchemaDefinition;

/// Read and parse a definition file.
pub(crate) fn load_definition(path: &str) -> Result<SchemaDefinition> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read definition file: {path}"))?;
    sv_core::parse(&text).with_context(|| format!("Failed to parse definition file: {path}"))
}

/// One-line description of a definition's contents.
pub(crate) fn summarize(definition: &SchemaDefinition) -> String {
    let statements: usize = definition.iter().map(|c| c.statement_count()).sum();
    format!(
        "{} chunk(s), {} statement(s), {} table(s)",
        definition.len(),
        statements,
        definition.tables().len()
    )
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
