//! In-memory MySQL-flavoured backend.
//!
//! Implements the dialect subset the migration engine and its tests
//! exercise: `CREATE TABLE` / `ALTER TABLE` with table-level `COMMENT`
//! attributes, `DROP TABLE`, `SHOW CREATE TABLE` and the
//! information-schema table-comment lookup. Unsupported statements fail
//! with a MySQL-style 1064 message. Data rows are not stored; DML
//! against a known table is accepted and ignored.

use crate::error::{DbError, DbResult};
use crate::executor::{Row, SqlExecutor};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::{Mutex, OnceLock};

static CREATE_RE: OnceLock<Regex> = OnceLock::new();
static ALTER_RE: OnceLock<Regex> = OnceLock::new();
static DROP_RE: OnceLock<Regex> = OnceLock::new();
static DML_RE: OnceLock<Regex> = OnceLock::new();
static SHOW_CREATE_RE: OnceLock<Regex> = OnceLock::new();
static TABLE_COMMENT_RE: OnceLock<Regex> = OnceLock::new();
static COMMENT_OPT_RE: OnceLock<Regex> = OnceLock::new();
static IDENT_RE: OnceLock<Regex> = OnceLock::new();

fn create_regex() -> &'static Regex {
    CREATE_RE.get_or_init(|| {
        Regex::new(
            r"(?is)^\s*create\s+table\s+(if\s+not\s+exists\s+)?(?:`([^`]+)`|([A-Za-z0-9_$.]+))\s*\((.*)$",
        )
        .expect("valid regex")
    })
}

fn alter_regex() -> &'static Regex {
    ALTER_RE.get_or_init(|| {
        Regex::new(r"(?is)^\s*alter\s+table\s+(?:`([^`]+)`|([A-Za-z0-9_$.]+))\s+(.*)$")
            .expect("valid regex")
    })
}

fn drop_regex() -> &'static Regex {
    DROP_RE.get_or_init(|| {
        Regex::new(r"(?is)^\s*drop\s+table\s+(if\s+exists\s+)?(?:`([^`]+)`|([A-Za-z0-9_$.]+))\s*$")
            .expect("valid regex")
    })
}

fn dml_regex() -> &'static Regex {
    DML_RE.get_or_init(|| {
        Regex::new(
            r"(?is)^\s*(?:insert\s+(?:ignore\s+)?into|update|delete\s+from)\s+(?:`([^`]+)`|([A-Za-z0-9_$.]+))",
        )
        .expect("valid regex")
    })
}

fn show_create_regex() -> &'static Regex {
    SHOW_CREATE_RE.get_or_init(|| {
        Regex::new(r"(?is)^\s*show\s+create\s+table\s+(?:`([^`]+)`|([A-Za-z0-9_$.]+))\s*$")
            .expect("valid regex")
    })
}

fn table_comment_regex() -> &'static Regex {
    TABLE_COMMENT_RE.get_or_init(|| {
        Regex::new(
            r#"(?is)^\s*select\s+table_comment\s+from\s+information_schema\.tables\s+where\s+table_name\s*=\s*["']([^"']+)["']"#,
        )
        .expect("valid regex")
    })
}

fn comment_opt_regex() -> &'static Regex {
    COMMENT_OPT_RE.get_or_init(|| {
        Regex::new(r"(?i)comment\s*=?\s*'((?:[^'\\]|\\.|'')*)'").expect("valid regex")
    })
}

fn ident_regex() -> &'static Regex {
    IDENT_RE.get_or_init(|| {
        Regex::new(r"(?s)^\s*(?:`([^`]+)`|([A-Za-z0-9_$.]+))\s*(.*)$").expect("valid regex")
    })
}

/// One column definition: name plus the rest of its definition text.
#[derive(Debug, Clone)]
struct ColumnDef {
    name: String,
    spec: String,
}

/// Stored table state: enough structure to replay `SHOW CREATE TABLE`.
#[derive(Debug, Clone, Default)]
struct TableState {
    columns: Vec<ColumnDef>,
    /// index/key/constraint entries, kept verbatim
    constraints: Vec<String>,
    /// table options minus the comment attribute, e.g. `ENGINE=InnoDB`
    options: String,
    comment: Option<String>,
}

#[derive(Debug, Default)]
struct State {
    tables: BTreeMap<String, TableState>,
    /// successfully executed statements, for test assertions
    log: Vec<String>,
}

/// In-memory database backend
pub struct MemoryDb {
    state: Mutex<State>,
}

impl MemoryDb {
    /// Create an empty in-memory database
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::default()),
        }
    }

    /// Statements successfully executed so far, in order.
    pub fn statement_log(&self) -> Vec<String> {
        self.state.lock().unwrap().log.clone()
    }

    /// Reset the statement log without touching table state.
    pub fn clear_statement_log(&self) {
        self.state.lock().unwrap().log.clear();
    }

    /// Render the `SHOW CREATE TABLE` output for `table`.
    pub fn show_create(&self, table: &str) -> DbResult<String> {
        let state = self.state.lock().unwrap();
        let t = state
            .tables
            .get(table)
            .ok_or_else(|| DbError::TableNotFound(table.to_string()))?;
        Ok(render_create(table, t))
    }

    fn execute_sync(&self, sql: &str) -> DbResult<u64> {
        let mut state = self.state.lock().unwrap();

        if let Some(caps) = create_regex().captures(sql) {
            let if_not_exists = caps.get(1).is_some();
            let name = capture_ident(&caps, 2, 3);
            let rest = caps.get(4).map(|m| m.as_str()).unwrap_or_default();
            if state.tables.contains_key(&name) {
                if if_not_exists {
                    state.log.push(sql.to_string());
                    return Ok(0);
                }
                return Err(DbError::Execution {
                    code: 1050,
                    message: format!("Table '{name}' already exists"),
                });
            }
            let table = parse_create_body(sql, rest)?;
            state.tables.insert(name, table);
            state.log.push(sql.to_string());
            return Ok(0);
        }

        if let Some(caps) = alter_regex().captures(sql) {
            let name = capture_ident(&caps, 1, 2);
            let actions = caps.get(3).map(|m| m.as_str()).unwrap_or_default();
            let mut table = state
                .tables
                .get(&name)
                .cloned()
                .ok_or_else(|| DbError::TableNotFound(name.clone()))?;
            apply_alter_actions(sql, actions, &mut table)?;
            state.tables.insert(name, table);
            state.log.push(sql.to_string());
            return Ok(0);
        }

        if let Some(caps) = drop_regex().captures(sql) {
            let if_exists = caps.get(1).is_some();
            let name = capture_ident(&caps, 2, 3);
            if state.tables.remove(&name).is_none() && !if_exists {
                return Err(DbError::TableNotFound(name));
            }
            state.log.push(sql.to_string());
            return Ok(0);
        }

        if let Some(caps) = dml_regex().captures(sql) {
            let name = capture_ident(&caps, 1, 2);
            if !state.tables.contains_key(&name) {
                return Err(DbError::TableNotFound(name));
            }
            state.log.push(sql.to_string());
            return Ok(1);
        }

        // session statements are accepted and ignored
        let head = sql.trim_start();
        if head.get(..4).is_some_and(|p| p.eq_ignore_ascii_case("set ")) {
            state.log.push(sql.to_string());
            return Ok(0);
        }

        Err(syntax_error(sql))
    }

    fn query_sync(&self, sql: &str) -> DbResult<Vec<Row>> {
        let state = self.state.lock().unwrap();

        if let Some(caps) = show_create_regex().captures(sql) {
            let name = capture_ident(&caps, 1, 2);
            let t = state
                .tables
                .get(&name)
                .ok_or_else(|| DbError::TableNotFound(name.clone()))?;
            let rendered = render_create(&name, t);
            return Ok(vec![vec![Some(name), Some(rendered)]]);
        }

        if let Some(caps) = table_comment_regex().captures(sql) {
            let name = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
            return Ok(match state.tables.get(name) {
                Some(t) => vec![vec![Some(t.comment.clone().unwrap_or_default())]],
                None => Vec::new(),
            });
        }

        Err(syntax_error(sql))
    }
}

impl Default for MemoryDb {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlExecutor for MemoryDb {
    fn execute(&self, sql: &str) -> DbResult<u64> {
        self.execute_sync(sql)
    }

    fn query(&self, sql: &str) -> DbResult<Vec<Row>> {
        self.query_sync(sql)
    }
}

/// MySQL-style 1064 error for statements outside the supported subset.
fn syntax_error(sql: &str) -> DbError {
    let snippet: String = sql.trim().chars().take(40).collect();
    DbError::Execution {
        code: 1064,
        message: format!(
            "You have an error in your SQL syntax; check the manual that corresponds to your MySQL server version for the right syntax to use near '{snippet}'"
        ),
    }
}

fn capture_ident(caps: &regex::Captures<'_>, quoted: usize, bare: usize) -> String {
    caps.get(quoted)
        .or_else(|| caps.get(bare))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Split a definition body or action list on top-level commas,
/// respecting parentheses and single-quoted literals.
fn split_top_level(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut in_quote = false;
    let mut start = 0usize;

    let bytes = text.as_bytes();
    let mut i = 0usize;
    while i < bytes.len() {
        let b = bytes[i];
        if in_quote {
            match b {
                b'\\' => i += 1,
                b'\'' if bytes.get(i + 1) == Some(&b'\'') => i += 1,
                b'\'' => in_quote = false,
                _ => {}
            }
        } else {
            match b {
                b'\'' => in_quote = true,
                b'(' => depth += 1,
                b')' => depth = depth.saturating_sub(1),
                b',' if depth == 0 => {
                    parts.push(text[start..i].trim());
                    start = i + 1;
                }
                _ => {}
            }
        }
        i += 1;
    }
    let tail = text[start..].trim();
    if !tail.is_empty() {
        parts.push(tail);
    }
    parts
}

/// Locate the top-level closing paren in the text following `CREATE
/// TABLE name (`, returning (body, trailing options).
fn split_body_and_options(rest: &str) -> Option<(&str, &str)> {
    let mut depth = 1usize;
    let mut in_quote = false;
    let bytes = rest.as_bytes();
    let mut i = 0usize;
    while i < bytes.len() {
        let b = bytes[i];
        if in_quote {
            match b {
                b'\\' => i += 1,
                b'\'' if bytes.get(i + 1) == Some(&b'\'') => i += 1,
                b'\'' => in_quote = false,
                _ => {}
            }
        } else {
            match b {
                b'\'' => in_quote = true,
                b'(' => depth += 1,
                b')' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some((&rest[..i], rest[i + 1..].trim()));
                    }
                }
                _ => {}
            }
        }
        i += 1;
    }
    None
}

fn is_constraint_entry(entry: &str) -> bool {
    let head = entry
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    matches!(
        head.as_str(),
        "primary" | "unique" | "key" | "index" | "constraint" | "foreign" | "fulltext" | "check"
    )
}

fn parse_column_def(sql: &str, entry: &str) -> DbResult<ColumnDef> {
    let caps = ident_regex().captures(entry).ok_or_else(|| syntax_error(sql))?;
    let name = capture_ident(&caps, 1, 2);
    if name.is_empty() {
        return Err(syntax_error(sql));
    }
    let spec = caps.get(3).map(|m| m.as_str().trim()).unwrap_or_default();
    Ok(ColumnDef {
        name,
        spec: spec.to_string(),
    })
}

fn parse_create_body(sql: &str, rest: &str) -> DbResult<TableState> {
    let (body, options) = split_body_and_options(rest).ok_or_else(|| syntax_error(sql))?;

    let mut table = TableState::default();
    for entry in split_top_level(body) {
        if is_constraint_entry(entry) {
            table.constraints.push(normalize_ws(entry));
        } else {
            table.columns.push(parse_column_def(sql, entry)?);
        }
    }

    let (options, comment) = extract_comment(options);
    table.options = options;
    table.comment = comment;
    Ok(table)
}

fn apply_alter_actions(sql: &str, actions: &str, table: &mut TableState) -> DbResult<()> {
    for action in split_top_level(actions) {
        let head = action
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match head.as_str() {
            "add" => {
                let rest = strip_keywords(action, &["add", "column"]);
                if is_constraint_entry(rest) {
                    table.constraints.push(normalize_ws(rest));
                } else {
                    let col = parse_column_def(sql, rest)?;
                    if table.columns.iter().any(|c| c.name == col.name) {
                        return Err(DbError::Execution {
                            code: 1060,
                            message: format!("Duplicate column name '{}'", col.name),
                        });
                    }
                    table.columns.push(col);
                }
            }
            "drop" => {
                let rest = strip_keywords(action, &["drop", "column"]);
                let col = parse_column_def(sql, rest)?;
                let before = table.columns.len();
                table.columns.retain(|c| c.name != col.name);
                if table.columns.len() == before {
                    return Err(DbError::Execution {
                        code: 1091,
                        message: format!(
                            "Can't DROP '{}'; check that column/key exists",
                            col.name
                        ),
                    });
                }
            }
            "modify" => {
                let rest = strip_keywords(action, &["modify", "column"]);
                let col = parse_column_def(sql, rest)?;
                match table.columns.iter_mut().find(|c| c.name == col.name) {
                    Some(existing) => existing.spec = col.spec,
                    None => {
                        return Err(DbError::Execution {
                            code: 1054,
                            message: format!("Unknown column '{}'", col.name),
                        })
                    }
                }
            }
            h if h.starts_with("comment") => match comment_opt_regex().captures(action) {
                Some(caps) => {
                    table.comment = Some(unescape_comment(
                        caps.get(1).map(|m| m.as_str()).unwrap_or_default(),
                    ))
                }
                None => return Err(syntax_error(sql)),
            },
            _ => return Err(syntax_error(sql)),
        }
    }
    Ok(())
}

/// Strip leading keywords (case-insensitive) from an ALTER action.
fn strip_keywords<'a>(action: &'a str, keywords: &[&str]) -> &'a str {
    let mut rest = action.trim();
    for kw in keywords {
        let head = rest.split_whitespace().next().unwrap_or_default();
        if head.eq_ignore_ascii_case(kw) {
            rest = rest[head.len()..].trim_start();
        }
    }
    rest
}

/// Pull the `COMMENT [=] '...'` attribute out of a table-options string,
/// returning (options without comment, comment text).
fn extract_comment(options: &str) -> (String, Option<String>) {
    match comment_opt_regex().captures(options) {
        Some(caps) => {
            let whole = caps.get(0).map(|m| m.range()).unwrap_or(0..0);
            let text = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
            let mut stripped = String::new();
            stripped.push_str(&options[..whole.start]);
            stripped.push_str(&options[whole.end..]);
            (
                normalize_ws(stripped.trim()),
                Some(unescape_comment(text)),
            )
        }
        None => (normalize_ws(options.trim()), None),
    }
}

fn unescape_comment(text: &str) -> String {
    text.replace("''", "'").replace("\\'", "'")
}

fn escape_comment(text: &str) -> String {
    text.replace('\'', "''")
}

fn normalize_ws(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Render a stored table the way `SHOW CREATE TABLE` reports it.
fn render_create(name: &str, table: &TableState) -> String {
    let mut entries: Vec<String> = table
        .columns
        .iter()
        .map(|c| {
            if c.spec.is_empty() {
                format!("  `{}`", c.name)
            } else {
                format!("  `{}` {}", c.name, normalize_ws(&c.spec))
            }
        })
        .collect();
    entries.extend(table.constraints.iter().map(|c| format!("  {c}")));

    let mut out = format!("CREATE TABLE `{}` (\n{}\n)", name, entries.join(",\n"));
    if !table.options.is_empty() {
        out.push(' ');
        out.push_str(&table.options);
    }
    if let Some(comment) = &table.comment {
        out.push_str(&format!(" COMMENT='{}'", escape_comment(comment)));
    }
    out
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;
