//! Locations command implementation

use anyhow::{Context, Result};
use am_db::locations;

use crate::cli::{GlobalArgs, LocationsArgs};
use crate::commands::common::open_database;

/// Execute the locations command: prefix search over towns and counties.
pub fn execute(args: &LocationsArgs, global: &GlobalArgs) -> Result<()> {
    let db = open_database(global)?;

    let results = locations(&db, &args.search)
        .context("Locations query failed (has `am seed` been run?)")?;

    if results.is_empty() {
        println!("No matching locations.");
        return Ok(());
    }

    for location in &results {
        println!("{location}");
    }

    Ok(())
}
