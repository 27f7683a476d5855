//! Versioned definition file parser.
//!
//! Splits a SQL file into statements on `;` terminators and groups them
//! into [`VersionChunk`]s. Statements accumulate in an open buffer; a
//! structural statement carrying a `version <label>` comment attribute
//! closes the buffer into one chunk tagged with that label and the
//! statement's target table.

use crate::chunk::{SchemaDefinition, VersionChunk};
use crate::error::{ParseError, ParseResult};
use crate::marker::{is_structural, structural_target, version_marker};
use crate::table_name::TableName;
use crate::version::VersionLabel;
use std::collections::HashMap;

/// Parse a definition file into an ordered sequence of version chunks.
///
/// Pure function: no I/O, no side effects. Statement order within and
/// across chunks is preserved exactly.
///
/// Statements left open after the last version marker are rejected with
/// [`ParseError::UnversionedTrailer`]; a file with statements but no
/// marker at all is rejected with [`ParseError::NoVersionMarker`].
/// Silent discard would hide migration work, so both are hard errors.
pub fn parse(text: &str) -> ParseResult<SchemaDefinition> {
    let mut chunks: Vec<VersionChunk> = Vec::new();
    let mut buffer: Vec<String> = Vec::new();
    let mut last_seen: HashMap<TableName, VersionLabel> = HashMap::new();

    for statement in split_statements(text) {
        let marker = version_marker(&statement);
        buffer.push(statement);

        let version = match marker {
            Some(version) => version,
            None => continue,
        };

        // A marker only closes a chunk on a structural statement; a
        // stray marker elsewhere is carried along as plain content.
        let closing = buffer.last().map(String::as_str).unwrap_or_default();
        let table = match structural_target(closing) {
            Some(table) => table,
            None if is_structural(closing) => {
                return Err(ParseError::UnparsableTarget {
                    statement: closing.to_string(),
                })
            }
            None => continue,
        };

        if let Some(prev) = last_seen.get(&table) {
            if *prev >= version {
                return Err(ParseError::NonMonotonicVersion {
                    table: table.into_inner(),
                    prev: prev.as_str().to_string(),
                    next: version.into_inner(),
                });
            }
        }
        last_seen.insert(table.clone(), version.clone());

        chunks.push(VersionChunk {
            version,
            table,
            statements: std::mem::take(&mut buffer),
        });
    }

    if !buffer.is_empty() {
        if chunks.is_empty() {
            return Err(ParseError::NoVersionMarker);
        }
        return Err(ParseError::UnversionedTrailer {
            count: buffer.len(),
        });
    }

    Ok(SchemaDefinition { chunks })
}

/// Scanner state for statement splitting.
enum State {
    Normal,
    SingleQuote,
    DoubleQuote,
    Backtick,
    LineComment,
    BlockComment,
}

/// Split raw SQL text into statements on `;` terminators.
///
/// Terminators inside string literals, quoted identifiers and comments
/// do not split. Each statement is sliced from its first meaningful
/// character, so comment lines preceding a statement do not mask it;
/// segments containing only whitespace and comments are dropped.
fn split_statements(text: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut state = State::Normal;
    let mut content_start: Option<usize> = None;

    let bytes = text.as_bytes();
    let mut i = 0usize;
    while i < bytes.len() {
        let b = bytes[i];
        match state {
            State::Normal => match b {
                b';' => {
                    if let Some(start) = content_start.take() {
                        let stmt = text[start..i].trim_end();
                        if !stmt.is_empty() {
                            statements.push(stmt.to_string());
                        }
                    }
                }
                b'\'' => {
                    state = State::SingleQuote;
                    content_start.get_or_insert(i);
                }
                b'"' => {
                    state = State::DoubleQuote;
                    content_start.get_or_insert(i);
                }
                b'`' => {
                    state = State::Backtick;
                    content_start.get_or_insert(i);
                }
                b'#' => state = State::LineComment,
                b'-' if bytes.get(i + 1) == Some(&b'-') => {
                    state = State::LineComment;
                    i += 1;
                }
                b'/' if bytes.get(i + 1) == Some(&b'*') => {
                    state = State::BlockComment;
                    i += 1;
                }
                _ => {
                    if !b.is_ascii_whitespace() {
                        content_start.get_or_insert(i);
                    }
                }
            },
            State::SingleQuote => match b {
                b'\\' => i += 1,
                // doubled quote is an escaped quote, not a terminator
                b'\'' if bytes.get(i + 1) == Some(&b'\'') => i += 1,
                b'\'' => state = State::Normal,
                _ => {}
            },
            State::DoubleQuote => match b {
                b'\\' => i += 1,
                b'"' if bytes.get(i + 1) == Some(&b'"') => i += 1,
                b'"' => state = State::Normal,
                _ => {}
            },
            State::Backtick => {
                if b == b'`' {
                    state = State::Normal;
                }
            }
            State::LineComment => {
                if b == b'\n' {
                    state = State::Normal;
                }
            }
            State::BlockComment => {
                if b == b'*' && bytes.get(i + 1) == Some(&b'/') {
                    state = State::Normal;
                    i += 1;
                }
            }
        }
        i += 1;
    }

    if let Some(start) = content_start {
        let stmt = text[start..].trim_end();
        if !stmt.is_empty() {
            statements.push(stmt.to_string());
        }
    }

    statements
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod tests;
