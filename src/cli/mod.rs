pub mod completions;
pub mod convert;
pub mod list;
pub mod validate;

use clap::{Parser, Subcommand};

/// ged - GEDCOM to JSON converter
#[derive(Parser, Debug)]
#[command(name = "ged")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert GEDCOM files to JSON
    Convert(convert::ConvertArgs),

    /// Parse GEDCOM files and report diagnostics without writing output
    Validate(validate::ValidateArgs),

    /// List the individuals and families in GEDCOM files
    List(list::ListArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
