//! Read queries over the seeded schema.

use crate::connection::MotorsDb;
use crate::error::{DbError, DbResult};

/// Locations whose town or county starts with `search`, case-insensitively.
///
/// A matching town renders as `"Town, County"`; a county that matches when
/// its town does not renders as just `"County"`. Results are distinct and
/// sorted.
pub fn locations(db: &MotorsDb, search: &str) -> DbResult<Vec<String>> {
    const SQL: &str = "SELECT DISTINCT CASE \
             WHEN town_name ILIKE ? || '%' THEN town_name || ', ' || county_name \
             ELSE county_name \
         END AS location \
         FROM towns JOIN counties USING (county_id) \
         WHERE town_name ILIKE ? || '%' OR county_name ILIKE ? || '%' \
         ORDER BY location";

    let mut stmt = db
        .conn()
        .prepare(SQL)
        .map_err(|e| DbError::QueryError(format!("prepare failed: {e}")))?;

    let rows = stmt
        .query_map(duckdb::params![search, search, search], |row| {
            row.get::<_, String>(0)
        })
        .map_err(|e| DbError::QueryError(format!("locations query failed: {e}")))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| DbError::QueryError(format!("row error: {e}")))?;

    Ok(rows)
}

/// Row count for a table in the main schema.
pub fn table_row_count(db: &MotorsDb, table_name: &str) -> DbResult<i64> {
    // Table names come from a fixed list, but reject anything unexpected
    // since identifiers cannot be bound as parameters.
    if !table_name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(DbError::QueryError(format!(
            "invalid table name: {table_name}"
        )));
    }

    let count: i64 = db
        .conn()
        .query_row(&format!("SELECT COUNT(*) FROM {table_name}"), [], |row| {
            row.get(0)
        })
        .map_err(|e| DbError::QueryError(format!("count of {table_name} failed: {e}")))?;
    Ok(count)
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
