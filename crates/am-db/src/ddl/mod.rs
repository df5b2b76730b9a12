//! Embedded DDL for the car-sales schema.
//!
//! Every run rebuilds the schema from scratch: the script drops all tables
//! in reverse dependency order, then recreates them in forward order. It is
//! executed via `execute_batch` inside the persistence transaction.

/// Full drop-and-recreate script for the nine schema tables.
pub static SCHEMA_SQL: &str = include_str!("schema.sql");
