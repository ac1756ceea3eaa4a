//! The `fields` subcommand: list the column names of an input table so the
//! operator can choose which one to bind to each role.

use anyhow::{Context, Result};
use std::path::Path;

use pharmasim::mapping::FieldRole;
use pharmasim::table::Table;

/// List the header fields of the input table
pub fn run(input: &Path) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }

    let table = Table::from_csv_file(input)
        .with_context(|| format!("Failed to load table: {}", input.display()))?;

    println!("Fields of {}", input.display());
    println!("========================");
    for (i, field) in table.header().iter().enumerate() {
        println!("  {:3}. {}", i + 1, field);
    }
    println!();
    println!("{} data rows", table.len());
    println!();
    println!("Bind one field to each role:");
    for role in FieldRole::ALL {
        println!("  - {role}");
    }

    Ok(())
}
