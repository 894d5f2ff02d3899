//! Convert command implementation.
//!
//! Parses GEDCOM files and writes pruned JSON, one output file per
//! input, into the output directory.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::diagnostics::report_warnings;
use crate::discovery::{discover, discover_paths, read_lines, DiscoveryResult};
use crate::error::{GedError, Result};
use crate::export::{to_json_string, Section};
use crate::output::{display_path, plural, Printer};
use crate::parser::{ParseOptions, ParseSession};

/// Convert GEDCOM files to JSON
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Files or directories to convert (default: current directory)
    pub files: Vec<PathBuf>,

    /// Output directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Sections to export: individuals, families, metadata (default all)
    #[arg(long, value_delimiter = ',')]
    pub fields: Vec<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Reject user tags that shadow standard tag names
    #[arg(long)]
    pub strict_tags: bool,

    /// Write JSON to stdout instead of files
    #[arg(long)]
    pub stdout: bool,
}

pub fn run(args: ConvertArgs, printer: &Printer) -> Result<()> {
    let discovery = discover_inputs(&args.files)?;
    let manifest = &discovery.manifest;

    let sections = resolve_sections(&args.fields, &discovery)?;
    let output_dir = args
        .output
        .clone()
        .unwrap_or_else(|| manifest.output.clone());
    let pretty = args.pretty || manifest.pretty;
    let options = ParseOptions {
        allow_redefined: !(args.strict_tags || manifest.strict_tags),
    };

    if discovery.files.is_empty() {
        printer.info("Nothing", "no GEDCOM files found");
        return Ok(());
    }

    if !args.stdout && !output_dir.exists() {
        fs::create_dir_all(&output_dir).map_err(|e| GedError::Io {
            path: output_dir.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let mut converted = 0;
    for file in &discovery.files {
        let lines = read_lines(file)?;

        let mut session = ParseSession::with_options(options);
        let outcome = session.parse(&lines);
        report_warnings(session.warnings());
        let document = outcome?;

        let json = to_json_string(&document, &sections, pretty)?;

        if args.stdout {
            println!("{}", json);
        } else {
            let stem = file
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or("converted");
            let target = output_dir.join(format!("{}.json", stem));
            fs::write(&target, &json).map_err(|e| GedError::Io {
                path: target.clone(),
                message: format!("Failed to write output: {}", e),
            })?;

            printer.status(
                "Converting",
                &format!(
                    "{} -> {} ({}, {})",
                    display_path(file),
                    display_path(&target),
                    plural(document.individuals.len(), "individual", "individuals"),
                    plural(document.families.len(), "family", "families"),
                ),
            );
        }
        converted += 1;
    }

    if !args.stdout {
        printer.status(
            "Finished",
            &format!("{} to {}", plural(converted, "file", "files"), output_dir.display()),
        );
    }

    Ok(())
}

/// Discover input files: explicit paths, or the current directory
/// (honoring a ged.yaml manifest) when none are given.
pub(super) fn discover_inputs(files: &[PathBuf]) -> Result<DiscoveryResult> {
    if files.is_empty() {
        discover(".")
    } else {
        discover_paths(files)
    }
}

/// Command-line fields win over the manifest's.
fn resolve_sections(fields: &[String], discovery: &DiscoveryResult) -> Result<Vec<Section>> {
    if fields.is_empty() {
        return discovery.manifest.sections();
    }
    fields
        .iter()
        .map(|field| {
            Section::from_name(field).ok_or_else(|| GedError::Parse {
                message: format!("Unknown output field '{}'", field),
                help: Some("Valid fields: individuals, families, metadata".to_string()),
            })
        })
        .collect()
}
