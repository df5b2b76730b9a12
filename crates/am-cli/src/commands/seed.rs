//! Seed command implementation

use anyhow::{Context, Result};
use am_core::{Config, Fixtures};
use am_db::{persist_schema, MotorsDb};
use am_etl::build_schema;
use std::path::Path;

use crate::cli::{GlobalArgs, SeedArgs};
use crate::commands::common::resolve_database_path;

/// Execute the seed command: load fixtures, build every table, and persist
/// the whole schema in one transaction.
pub fn execute(args: &SeedArgs, global: &GlobalArgs) -> Result<()> {
    let root = Path::new(&global.project_dir);
    let config = Config::load(root).context("Failed to load project config")?;
    let fixtures = Fixtures::load(&config, root).context("Failed to load fixtures")?;

    if global.verbose {
        eprintln!(
            "[verbose] Loaded {} cars, {} customers, {} listings",
            fixtures.cars.len(),
            fixtures.customers.len(),
            fixtures.listings.len()
        );
    }

    let tables = build_schema(&fixtures).context("Failed to build tables")?;

    if args.dry_run {
        println!("Built {} tables (dry run, nothing persisted)", tables.len());
        return Ok(());
    }

    let db_path = resolve_database_path(global, &config, root);
    let db = MotorsDb::new(&db_path).context("Failed to connect to database")?;

    let summaries = persist_schema(&db, &tables).context("Failed to persist schema")?;

    println!("Seeded {} tables:\n", summaries.len());
    let mut total_rows = 0;
    for summary in &summaries {
        total_rows += summary.rows;
        println!("  ✓ {} ({} rows)", summary.table, summary.rows);
    }
    println!();
    println!("Done ({total_rows} total rows)");

    Ok(())
}
