//! Arthur's Motors CLI - rebuilds and queries the car-sales demo schema

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::{locations, seed, tables};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        cli::Commands::Seed(args) => seed::execute(args, &cli.global),
        cli::Commands::Locations(args) => locations::execute(args, &cli.global),
        cli::Commands::Tables => tables::execute(&cli.global),
    }
}
