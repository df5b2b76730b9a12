//! Database connection wrapper.
//!
//! [`MotorsDb`] owns a DuckDB [`Connection`] and provides helpers for
//! opening and transacting against the car-sales database. The connection
//! is passed explicitly wherever it is needed; there is no process-global
//! engine or session state.

use crate::error::{DbError, DbResult};
use duckdb::Connection;
use std::path::Path;

/// Wrapper around a single DuckDB connection.
///
/// Single-threaded — the build is a one-shot batch step, so no `Mutex`
/// is needed.
#[derive(Debug)]
pub struct MotorsDb {
    conn: Connection,
}

impl MotorsDb {
    /// Open (or create) the database at `path`.
    pub fn open(path: &Path) -> DbResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| DbError::ConnectionError(format!("{e}: {}", path.display())))?;
        Ok(Self { conn })
    }

    /// Create an in-memory database. Useful for tests.
    pub fn open_memory() -> DbResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Open from a path string (handles the ":memory:" special case).
    pub fn new(path: &str) -> DbResult<Self> {
        if path == ":memory:" {
            Self::open_memory()
        } else {
            Self::open(Path::new(path))
        }
    }

    /// Borrow the underlying DuckDB connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Execute `body` within a `BEGIN` / `COMMIT` transaction, rolling back
    /// on error.
    ///
    /// A failed commit also rolls back, so no partially persisted state is
    /// ever left visible.
    pub fn transaction<F, T>(&self, body: F) -> DbResult<T>
    where
        F: FnOnce(&Connection) -> DbResult<T>,
    {
        self.conn
            .execute_batch("BEGIN TRANSACTION")
            .map_err(|e| DbError::TransactionError(format!("BEGIN failed: {e}")))?;

        let result = body(&self.conn);

        match &result {
            Ok(_) => {
                if let Err(commit_err) = self.conn.execute_batch("COMMIT") {
                    let _ = self.conn.execute_batch("ROLLBACK");
                    return Err(DbError::TransactionError(format!(
                        "COMMIT failed: {commit_err}"
                    )));
                }
            }
            Err(_) => {
                let _ = self.conn.execute_batch("ROLLBACK");
            }
        }
        result
    }

    /// Check whether a table exists in the main schema.
    pub fn table_exists(&self, name: &str) -> DbResult<bool> {
        let count: i64 = self
            .conn
            .query_row(
                "SELECT COUNT(*) FROM information_schema.tables \
                 WHERE table_schema = 'main' AND table_name = ?",
                duckdb::params![name],
                |row| row.get(0),
            )
            .map_err(|e| DbError::QueryError(e.to_string()))?;
        Ok(count > 0)
    }
}

#[cfg(test)]
#[path = "connection_test.rs"]
mod tests;
