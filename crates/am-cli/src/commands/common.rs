//! Shared helpers for command implementations

use crate::cli::GlobalArgs;
use am_core::Config;
use am_db::MotorsDb;
use anyhow::{Context, Result};
use std::path::Path;

/// Resolve the database path: the global `--database` override wins over
/// the config's `database.path`.
pub fn resolve_database_path(global: &GlobalArgs, config: &Config, root: &Path) -> String {
    match &global.database {
        Some(path) => {
            log::debug!("Database path overridden on the command line: {path}");
            path.clone()
        }
        None => config.database_path(root).display().to_string(),
    }
}

/// Load the project config and open its database connection.
pub fn open_database(global: &GlobalArgs) -> Result<MotorsDb> {
    let root = Path::new(&global.project_dir);
    let config = Config::load(root).context("Failed to load project config")?;
    let db_path = resolve_database_path(global, &config, root);

    log::debug!("Opening database at {db_path}");
    if global.verbose {
        eprintln!("[verbose] Using database at {db_path}");
    }

    MotorsDb::new(&db_path).context("Failed to connect to database")
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
