//! schemaver CLI - inspect, lint and rehearse versioned schema files

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::{apply, check, parse};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        cli::Commands::Parse(args) => parse::execute(args, &cli.global),
        cli::Commands::Check(args) => check::execute(args, &cli.global),
        cli::Commands::Apply(args) => apply::execute(args, &cli.global),
    }
}
