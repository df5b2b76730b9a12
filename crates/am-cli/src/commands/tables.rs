//! Tables command implementation

use anyhow::{Context, Result};
use am_db::table_row_count;
use am_etl::TABLE_ORDER;

use crate::cli::GlobalArgs;
use crate::commands::common::open_database;

/// Execute the tables command: list every schema table with its row count.
pub fn execute(global: &GlobalArgs) -> Result<()> {
    let db = open_database(global)?;

    for table in TABLE_ORDER {
        let rows = table_row_count(&db, table)
            .context("Failed to count rows (has `am seed` been run?)")?;
        println!("{table:<16} {rows}");
    }

    Ok(())
}
