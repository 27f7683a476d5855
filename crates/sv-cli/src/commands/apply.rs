//! Apply command implementation
//!
//! Rehearses a definition file against a scratch in-memory database:
//! shows which versions each table reaches without touching any real
//! schema. `--twice` re-applies the file to demonstrate that an
//! up-to-date table executes zero statements.

use anyhow::{Context, Result};
use sv_db::MemoryDb;
use sv_schema::Schema;

use crate::cli::{ApplyArgs, GlobalArgs};
use crate::commands::common::load_definition;

/// Execute the apply command
pub fn execute(args: &ApplyArgs, global: &GlobalArgs) -> Result<()> {
    let definition = load_definition(&args.file)?;

    let db = MemoryDb::new();
    let schema = Schema::new(&db);

    schema
        .apply(&definition)
        .with_context(|| format!("Failed to apply definition file: {}", args.file))?;

    let executed = db.statement_log().len();
    println!("applied {}: {} statement(s) executed", args.file, executed);

    for table in definition.tables() {
        let version = schema
            .current_table_version(table)
            .with_context(|| format!("Failed to resolve version of table {table}"))?;
        match version {
            Some(version) => println!("  {table}: version {version}"),
            None => println!("  {table}: not created"),
        }
    }

    if args.twice {
        db.clear_statement_log();
        schema
            .apply(&definition)
            .context("Second application failed")?;
        let executed = db.statement_log().len();
        println!("re-applied {}: {} statement(s) executed", args.file, executed);
    }

    if global.verbose {
        for sql in db.statement_log() {
            eprintln!("[verbose] executed: {sql}");
        }
    }

    Ok(())
}
