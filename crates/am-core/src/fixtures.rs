//! JSON fixture loading.
//!
//! Fixtures are JSON arrays of flat (or one-level-nested) record objects.
//! Records are kept as [`serde_json::Value`] maps because the normalization
//! builders address attributes by dotted string paths.

use crate::config::Config;
use crate::error::{CoreError, CoreResult};
use serde_json::Value;
use std::path::Path;

/// The three fixture record sets the build plan consumes.
#[derive(Debug, Clone)]
pub struct Fixtures {
    /// Car specifications: make, model, colour/fuel/transmission options
    pub cars: Vec<Value>,
    /// Registered customers with a nested location object
    pub customers: Vec<Value>,
    /// Individual car listings offered for sale
    pub listings: Vec<Value>,
}

impl Fixtures {
    /// Load all three fixture files declared in the config.
    pub fn load(config: &Config, root: &Path) -> CoreResult<Self> {
        Ok(Self {
            cars: load_records(&config.cars_path(root))?,
            customers: load_records(&config.customers_path(root))?,
            listings: load_records(&config.listings_path(root))?,
        })
    }
}

/// Load a fixture file as a vector of record objects.
///
/// The file must contain a top-level JSON array whose elements are all
/// objects; anything else is rejected up front so the builders never see a
/// malformed record.
pub fn load_records(path: &Path) -> CoreResult<Vec<Value>> {
    if !path.exists() {
        return Err(CoreError::FixtureNotFound {
            path: path.display().to_string(),
        });
    }

    let raw = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
        path: path.display().to_string(),
        source: e,
    })?;

    let value: Value = serde_json::from_str(&raw).map_err(|e| CoreError::FixtureParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let records = match value {
        Value::Array(items) => items,
        _ => {
            return Err(CoreError::FixtureInvalid {
                path: path.display().to_string(),
                reason: "expected a top-level JSON array".to_string(),
            })
        }
    };

    for (i, record) in records.iter().enumerate() {
        if !record.is_object() {
            return Err(CoreError::FixtureInvalid {
                path: path.display().to_string(),
                reason: format!("element {i} is not an object"),
            });
        }
    }

    log::debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod tests;
