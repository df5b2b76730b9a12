//! Error types for am-etl
//!
//! All variants are fatal to the current build run: the input is a static
//! fixture, so a retry would reproduce the same failure.

use thiserror::Error;

/// Normalization pipeline errors
#[derive(Error, Debug)]
pub enum EtlError {
    /// N001: a dimension build produced zero rows
    #[error("[N001] Empty input: attribute '{attribute}' produced no dimension rows")]
    EmptyInput { attribute: String },

    /// N002: a join key has no matching row in the referenced table
    #[error("[N002] Unresolved reference for role '{role}': no match for '{value}' in record {record}")]
    UnresolvedReference {
        role: String,
        value: String,
        record: String,
    },

    /// N003: a declared role's table argument is absent or malformed.
    /// This is a programmer error, reported before any join is attempted.
    #[error("[N003] Schema mismatch for role '{role}': {reason}")]
    SchemaMismatch { role: String, reason: String },

    /// N004: a record lacks a scalar value at a declared attribute path
    #[error("[N004] Missing attribute '{attribute}' in record {record}")]
    AttributeMissing { attribute: String, record: String },
}

/// Result type alias for EtlError
pub type EtlResult<T> = Result<T, EtlError>;
