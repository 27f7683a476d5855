//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// schemaver - incremental schema migrations driven by in-schema version markers
#[derive(Parser, Debug)]
#[command(name = "sv")]
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
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a definition file and print its version chunks
    Parse(ParseArgs),

    /// Lint a definition file without executing anything
    Check(CheckArgs),

    /// Rehearse a definition file against a scratch in-memory database
    Apply(ApplyArgs),
}

/// Arguments for the parse command
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Definition file to parse
    pub file: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    pub output: ParseOutput,
}

/// Parse output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutput {
    /// JSON chunk listing
    Json,
    /// Human-readable chunk summary
    Summary,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Definition file to lint
    pub file: String,
}

/// Arguments for the apply command
#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Definition file to rehearse
    pub file: String,

    /// Apply the file twice to demonstrate idempotence
    #[arg(long)]
    pub twice: bool,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
