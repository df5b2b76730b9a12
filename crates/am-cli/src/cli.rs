//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};

/// Arthur's Motors - rebuild and query the car-sales demo schema
#[derive(Parser, Debug)]
#[command(name = "am")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override the database path from motors.yml
    #[arg(short, long, global = true)]
    pub database: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rebuild the relational schema from the JSON fixtures
    Seed(SeedArgs),

    /// Search locations by town or county prefix
    Locations(LocationsArgs),

    /// List schema tables with their row counts
    Tables,
}

/// Arguments for the seed command
#[derive(Args, Debug)]
pub struct SeedArgs {
    /// Build all tables but skip persistence
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the locations command
#[derive(Args, Debug)]
pub struct LocationsArgs {
    /// Town or county prefix to match (case-insensitive; empty matches all)
    #[arg(short, long, default_value = "")]
    pub search: String,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
