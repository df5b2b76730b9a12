//! Command implementations

pub mod common;
pub mod locations;
pub mod seed;
pub mod tables;
