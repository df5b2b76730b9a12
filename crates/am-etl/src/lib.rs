//! am-etl - Normalization pipeline for Arthur's Motors
//!
//! Reshapes denormalized JSON fixture records into a normalized relational
//! schema: dimension tables (deduplicated attribute values with dense
//! 1-based surrogate keys), dependent dimensions (with a foreign key into a
//! parent dimension), and fact tables (input-ordered rows whose every
//! foreign key is resolved through an explicit equality join).

pub mod dimension;
pub mod error;
pub mod fact;
pub mod key;
pub mod plan;
pub mod table;

pub use dimension::{build_dependent_dimension, build_dimension, Dimension, DimensionSpec};
pub use error::{EtlError, EtlResult};
pub use fact::{build_fact_table, DimensionRef, FactRole, FactSpec, ScalarColumn};
pub use key::{AttributePath, NaturalKey};
pub use plan::{build_schema, TABLE_ORDER};
pub use table::{JoinSource, Scalar, TableData};
