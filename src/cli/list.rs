//! List command implementation.
//!
//! Parses GEDCOM files and prints an inventory of individuals (and,
//! on request, families) to stdout.

use std::path::PathBuf;

use clap::Args;

use crate::diagnostics::report_warnings;
use crate::discovery::read_lines;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::parser::ParseSession;
use crate::types::{Document, Sex};

/// List the individuals and families in GEDCOM files
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Files or directories to list (default: current directory)
    pub files: Vec<PathBuf>,

    /// Also list families
    #[arg(long)]
    pub families: bool,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let discovery = super::convert::discover_inputs(&args.files)?;

    if discovery.files.is_empty() {
        printer.info("Nothing", "no GEDCOM files found");
        return Ok(());
    }

    for file in &discovery.files {
        let lines = read_lines(file)?;

        let mut session = ParseSession::new();
        let outcome = session.parse(&lines);
        report_warnings(session.warnings());
        let document = outcome?;

        printer.info(
            "File",
            &format!(
                "{} ({}, {})",
                display_path(file),
                plural(document.individuals.len(), "individual", "individuals"),
                plural(document.families.len(), "family", "families"),
            ),
        );

        print_individuals(&document);
        if args.families {
            print_families(&document);
        }
    }

    Ok(())
}

fn print_individuals(document: &Document) {
    for individual in &document.individuals {
        let name = individual.primary_name().unwrap_or("(no name)");
        println!("{}  {} ({})", individual.id, name, sex_label(individual.sex));
    }
}

fn print_families(document: &Document) {
    for family in &document.families {
        let parents: Vec<&str> = [family.parent_one.as_deref(), family.parent_two.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        println!(
            "{}  parents: {}  {}",
            family.id,
            if parents.is_empty() {
                "none".to_string()
            } else {
                parents.join(" + ")
            },
            plural(family.children.len(), "child", "children"),
        );
    }
}

fn sex_label(sex: Sex) -> &'static str {
    match sex {
        Sex::Male => "M",
        Sex::Female => "F",
        Sex::Unknown => "U",
        Sex::Intersex => "X",
        Sex::NotRecorded => "N",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_list_runs() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("tree.ged");
        fs::write(
            &input,
            "0 @I1@ INDI\n1 NAME Jane /Doe/\n1 SEX F\n0 @F1@ FAM\n1 WIFE @I1@\n0 TRLR\n",
        )
        .unwrap();

        let args = ListArgs {
            files: vec![input],
            families: true,
        };
        assert!(run(args, &Printer::new()).is_ok());
    }
}
