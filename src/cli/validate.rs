//! Validate command implementation.
//!
//! Parses GEDCOM files and reports diagnostics without writing any
//! output. Warnings are printed for every file; the first fatal error
//! aborts with a non-zero exit.

use std::path::PathBuf;

use clap::Args;

use crate::diagnostics::report_warnings;
use crate::discovery::read_lines;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::parser::{ParseOptions, ParseSession};

/// Parse GEDCOM files and report diagnostics without writing output
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Files or directories to validate (default: current directory)
    pub files: Vec<PathBuf>,

    /// Reject user tags that shadow standard tag names
    #[arg(long)]
    pub strict_tags: bool,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let discovery = super::convert::discover_inputs(&args.files)?;
    let options = ParseOptions {
        allow_redefined: !(args.strict_tags || discovery.manifest.strict_tags),
    };

    if discovery.files.is_empty() {
        printer.info("Nothing", "no GEDCOM files found");
        return Ok(());
    }

    let mut total_warnings = 0;
    for file in &discovery.files {
        let lines = read_lines(file)?;

        let mut session = ParseSession::with_options(options);
        let outcome = session.parse(&lines);
        report_warnings(session.warnings());
        total_warnings += session.warnings().len();
        let document = outcome?;

        printer.status(
            "Validated",
            &format!(
                "{} ({}, {})",
                display_path(file),
                plural(document.individuals.len(), "individual", "individuals"),
                plural(document.families.len(), "family", "families"),
            ),
        );
    }

    if total_warnings > 0 {
        printer.warning(
            "Passed",
            &format!(
                "{} with {}",
                plural(discovery.files.len(), "file", "files"),
                plural(total_warnings, "warning", "warnings"),
            ),
        );
    } else {
        printer.status("Passed", &plural(discovery.files.len(), "file", "files"));
    }

    Ok(())
}
