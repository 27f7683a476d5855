//! Version-marker detection.
//!
//! A chunk boundary is a structural statement (`CREATE TABLE` or
//! `ALTER TABLE`) whose table-level comment attribute contains the
//! literal text `version <label>`. The same pattern is read back from a
//! live table's reconstructed definition or from its metadata-catalog
//! comment to recover the applied version.

use crate::table_name::TableName;
use crate::version::VersionLabel;
use regex::Regex;
use std::sync::OnceLock;

static COMMENT_ATTR_RE: OnceLock<Regex> = OnceLock::new();
static MARKER_RE: OnceLock<Regex> = OnceLock::new();
static STRUCTURAL_RE: OnceLock<Regex> = OnceLock::new();
static STRUCTURAL_PREFIX_RE: OnceLock<Regex> = OnceLock::new();

/// Get the compiled comment-attribute regex (built once, reused)
fn comment_attr_regex() -> &'static Regex {
    COMMENT_ATTR_RE.get_or_init(|| {
        Regex::new(r#"(?i)comment\s*=?\s*'((?:[^'\\]|\\.|'')*)'"#).expect("valid regex")
    })
}

/// Get the compiled `version <label>` regex (built once, reused)
fn marker_regex() -> &'static Regex {
    MARKER_RE.get_or_init(|| Regex::new(r"(?i)(?:^|\s)version\s+(\S+)").expect("valid regex"))
}

/// Get the compiled structural-statement regex (built once, reused)
fn structural_regex() -> &'static Regex {
    STRUCTURAL_RE.get_or_init(|| {
        Regex::new(r"(?i)^\s*(?:create|alter)\s+table\s+(?:if\s+not\s+exists\s+)?(?:`([^`]+)`|([A-Za-z0-9_$.]+))")
            .expect("valid regex")
    })
}

/// Get the compiled structural-prefix regex (built once, reused)
fn structural_prefix_regex() -> &'static Regex {
    STRUCTURAL_PREFIX_RE.get_or_init(|| {
        Regex::new(r"(?i)^\s*(?:create|alter)\s+table\b").expect("valid regex")
    })
}

/// Whether a statement is structural (`CREATE TABLE` / `ALTER TABLE`),
/// regardless of whether its target table name can be extracted.
pub fn is_structural(sql: &str) -> bool {
    structural_prefix_regex().is_match(sql)
}

/// Parse a `version <label>` marker out of a raw comment string, as
/// stored in a metadata catalog's table-comment column.
pub fn comment_marker(comment: &str) -> Option<VersionLabel> {
    marker_regex()
        .captures(comment)
        .and_then(|caps| caps.get(1))
        .and_then(|m| VersionLabel::try_new(m.as_str()))
}

/// Parse the version marker from a SQL statement or reconstructed table
/// definition.
///
/// Scans every `COMMENT [=] '...'` attribute in the text and returns the
/// marker from the last one that carries the `version <label>` pattern.
/// The table-level comment is the last attribute in a `CREATE TABLE`
/// definition, so column comments that happen to mention a version do
/// not shadow it.
pub fn version_marker(sql: &str) -> Option<VersionLabel> {
    comment_attr_regex()
        .captures_iter(sql)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| comment_marker(m.as_str()))
        .last()
}

/// Return the target table of a structural statement, or `None` if the
/// statement is not a `CREATE TABLE` / `ALTER TABLE`.
///
/// Handles optional `IF NOT EXISTS` and backtick-quoted names.
pub fn structural_target(sql: &str) -> Option<TableName> {
    let caps = structural_regex().captures(sql)?;
    let name = caps
        .get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str())
        .unwrap_or_default();
    TableName::try_new(name)
}

#[cfg(test)]
#[path = "marker_test.rs"]
mod tests;
