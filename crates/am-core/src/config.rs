//! Configuration types and parsing for motors.yml

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the project configuration file.
pub const CONFIG_FILE: &str = "motors.yml";

/// Main project configuration from motors.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Project name
    pub name: String,

    /// Project version
    #[serde(default = "default_version")]
    pub version: String,

    /// Fixture file locations, relative to the project root
    #[serde(default)]
    pub fixtures: FixtureConfig,

    /// Database connection configuration
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Paths to the three JSON fixture files
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureConfig {
    /// Car specifications (makes, models, colour/fuel/transmission options)
    #[serde(default = "default_cars_path")]
    pub cars: String,

    /// Registered customers with their locations
    #[serde(default = "default_customers_path")]
    pub customers: String,

    /// Individual car listings
    #[serde(default = "default_listings_path")]
    pub listings: String,
}

/// Database connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Path to the DuckDB database file (or ":memory:")
    #[serde(default = "default_db_path")]
    pub path: String,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

fn default_cars_path() -> String {
    "data/json/cars.json".to_string()
}

fn default_customers_path() -> String {
    "data/json/customers.json".to_string()
}

fn default_listings_path() -> String {
    "data/json/cars_for_sale.json".to_string()
}

fn default_db_path() -> String {
    "motors.duckdb".to_string()
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            cars: default_cars_path(),
            customers: default_customers_path(),
            listings: default_listings_path(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

impl Config {
    /// Load the configuration from `<project_dir>/motors.yml`.
    pub fn load(project_dir: &Path) -> CoreResult<Self> {
        let path = project_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let raw = std::fs::read_to_string(&path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;

        let config: Config =
            serde_yaml::from_str(&raw).map_err(|e| CoreError::ConfigParseError {
                message: e.to_string(),
            })?;

        log::debug!("Loaded config for project '{}'", config.name);
        Ok(config)
    }

    /// Absolute path to the cars fixture.
    pub fn cars_path(&self, root: &Path) -> PathBuf {
        resolve(root, &self.fixtures.cars)
    }

    /// Absolute path to the customers fixture.
    pub fn customers_path(&self, root: &Path) -> PathBuf {
        resolve(root, &self.fixtures.customers)
    }

    /// Absolute path to the listings fixture.
    pub fn listings_path(&self, root: &Path) -> PathBuf {
        resolve(root, &self.fixtures.listings)
    }

    /// Absolute path to the database file (":memory:" passes through).
    pub fn database_path(&self, root: &Path) -> PathBuf {
        if self.database.path == ":memory:" {
            PathBuf::from(&self.database.path)
        } else {
            resolve(root, &self.database.path)
        }
    }
}

fn resolve(root: &Path, path: &str) -> PathBuf {
    let p = Path::new(path);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        root.join(p)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
