//! am-core - Core library for Arthur's Motors
//!
//! This crate provides configuration parsing (`motors.yml`), JSON fixture
//! loading, and the shared error type used across all components.

pub mod config;
pub mod error;
pub mod fixtures;

pub use config::{Config, DatabaseConfig, FixtureConfig};
pub use error::{CoreError, CoreResult};
pub use fixtures::{load_records, Fixtures};
