//! Parse command implementation

use anyhow::{Context, Result};

use crate::cli::{GlobalArgs, ParseArgs, ParseOutput};
use crate::commands::common::{load_definition, summarize};

/// Execute the parse command
pub fn execute(args: &ParseArgs, global: &GlobalArgs) -> Result<()> {
    let definition = load_definition(&args.file)?;

    if global.verbose {
        eprintln!("[verbose] {}: {}", args.file, summarize(&definition));
    }

    match args.output {
        ParseOutput::Json => {
            let json = serde_json::to_string_pretty(&definition)
                .context("Failed to serialize definition")?;
            println!("{json}");
        }
        ParseOutput::Summary => {
            for chunk in &definition {
                println!(
                    "{}  version {}  ({} statement(s))",
                    chunk.table,
                    chunk.version,
                    chunk.statement_count()
                );
            }
        }
    }

    Ok(())
}
