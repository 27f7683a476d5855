//! Check command implementation
//!
//! Parsing already enforces the file invariants (every statement inside
//! a versioned chunk, versions strictly increasing per table), so a
//! successful parse is a passing lint.

use anyhow::Result;

use crate::cli::{CheckArgs, GlobalArgs};
use crate::commands::common::{load_definition, summarize};

/// Execute the check command
pub fn execute(args: &CheckArgs, global: &GlobalArgs) -> Result<()> {
    let definition = load_definition(&args.file)?;

    if global.verbose {
        for table in definition.tables() {
            let version = definition
                .final_version(table)
                .map(|v| v.as_str())
                .unwrap_or("-");
            eprintln!("[verbose] table {table} reaches version {version}");
        }
    }

    println!("{}: OK ({})", args.file, summarize(&definition));
    Ok(())
}
