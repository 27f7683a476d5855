//! SQL executor trait definition

use crate::error::DbResult;

/// One result row: cell values in column order, `None` for SQL NULL.
pub type Row = Vec<Option<String>>;

/// Executor abstraction over a live database connection.
///
/// The engine treats the connection as an injected capability: it never
/// opens, closes or pools connections itself, and it never retries. All
/// calls are synchronous and block the caller's thread.
pub trait SqlExecutor {
    /// Execute a statement that mutates schema or data, returning the
    /// number of affected rows.
    fn execute(&self, sql: &str) -> DbResult<u64>;

    /// Execute a read query and return its rows.
    fn query(&self, sql: &str) -> DbResult<Vec<Row>>;
}

impl<T: SqlExecutor + ?Sized> SqlExecutor for &T {
    fn execute(&self, sql: &str) -> DbResult<u64> {
        (**self).execute(sql)
    }

    fn query(&self, sql: &str) -> DbResult<Vec<Row>> {
        (**self).query(sql)
    }
}

impl<T: SqlExecutor + ?Sized> SqlExecutor for Box<T> {
    fn execute(&self, sql: &str) -> DbResult<u64> {
        (**self).execute(sql)
    }

    fn query(&self, sql: &str) -> DbResult<Vec<Row>> {
        (**self).query(sql)
    }
}
