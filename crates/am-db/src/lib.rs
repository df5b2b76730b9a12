//! am-db - DuckDB layer for Arthur's Motors
//!
//! Owns the database connection, the embedded schema DDL, the
//! single-transaction persistence of the built tables, and the read
//! queries the CLI exposes.

pub mod connection;
pub mod ddl;
pub mod error;
pub mod persist;
pub mod query;

pub use connection::MotorsDb;
pub use error::{DbError, DbResult};
pub use persist::{persist_schema, TableSummary};
pub use query::{locations, table_row_count};
