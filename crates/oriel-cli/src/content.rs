//! # Content Subcommand
//!
//! Validates the built-in content table and dumps it (or one section of
//! it) as pretty JSON for downstream tooling.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use oriel_content::ContentTable;

/// Arguments for the `oriel content` subcommand.
#[derive(Args, Debug)]
pub struct ContentArgs {
    /// Which part of the table to emit.
    #[arg(long, value_enum, default_value_t = Section::All)]
    pub section: Section,
}

/// The dumpable sections of the content table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    /// The whole table.
    All,
    /// Persona journeys only.
    Journeys,
    /// Smart systems only.
    Systems,
    /// Building levels only.
    Building,
}

/// Validate the table, then dump the requested section.
pub fn run_content(args: &ContentArgs) -> Result<u8> {
    let table = ContentTable::builtin();
    table.validate().context("content table failed validation")?;

    let json = match args.section {
        Section::All => serde_json::to_string_pretty(&table)?,
        Section::Journeys => serde_json::to_string_pretty(&table.journeys)?,
        Section::Systems => serde_json::to_string_pretty(&table.systems)?,
        Section::Building => serde_json::to_string_pretty(&table.levels)?,
    };
    println!("{json}");
    Ok(0)
}
