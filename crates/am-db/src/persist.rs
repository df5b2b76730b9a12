//! Single-transaction persistence of the built tables.
//!
//! The whole batch is all-or-nothing: schema drop/recreate and every row
//! insert run inside one transaction, in the dependency order the build
//! plan supplies (referenced tables first). Any failure rolls everything
//! back.

use crate::connection::MotorsDb;
use crate::ddl::SCHEMA_SQL;
use crate::error::{DbError, DbResult};
use am_etl::{Scalar, TableData};
use duckdb::types::Value;
use duckdb::{params_from_iter, Connection};

/// Per-table outcome of a persistence run, for reporting.
#[derive(Debug, Clone)]
pub struct TableSummary {
    pub table: String,
    pub rows: usize,
}

/// Drop, recreate, and populate the whole schema in one transaction.
pub fn persist_schema(db: &MotorsDb, tables: &[TableData]) -> DbResult<Vec<TableSummary>> {
    db.transaction(|conn| {
        conn.execute_batch(SCHEMA_SQL)
            .map_err(|e| DbError::ExecutionError(format!("schema DDL failed: {e}")))?;

        let mut summaries = Vec::with_capacity(tables.len());
        for table in tables {
            let rows = insert_table(conn, table)?;
            log::debug!("Persisted '{}' ({rows} rows)", table.name);
            summaries.push(TableSummary {
                table: table.name.clone(),
                rows,
            });
        }
        Ok(summaries)
    })
}

/// Insert every row of one table with a prepared statement.
fn insert_table(conn: &Connection, table: &TableData) -> DbResult<usize> {
    if table.rows.is_empty() {
        return Ok(0);
    }

    let placeholders = vec!["?"; table.columns.len()].join(", ");
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table.name,
        table.columns.join(", "),
        placeholders
    );

    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| DbError::ExecutionError(format!("insert into {}: {e}", table.name)))?;

    for row in &table.rows {
        stmt.execute(params_from_iter(row.iter().map(scalar_to_value)))
            .map_err(|e| DbError::ExecutionError(format!("insert into {}: {e}", table.name)))?;
    }

    Ok(table.rows.len())
}

fn scalar_to_value(scalar: &Scalar) -> Value {
    match scalar {
        Scalar::Null => Value::Null,
        Scalar::Bool(b) => Value::Boolean(*b),
        Scalar::Int(n) => Value::BigInt(*n),
        Scalar::Float(f) => Value::Double(*f),
        Scalar::Text(s) => Value::Text(s.clone()),
    }
}

#[cfg(test)]
#[path = "persist_test.rs"]
mod tests;
