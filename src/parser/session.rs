//! The parse session: all state shared between parsing stages.
//!
//! One session parses one file. It threads the cross-reference table,
//! the warning log, the top-level role buckets and the parse options
//! through every stage; results travel back by value and the first
//! fatal error short-circuits the pipeline through ordinary `?`
//! propagation.

use crate::diagnostics::WarningLog;
use crate::error::Result;
use crate::registry::{IndividualArena, XrefTable};
use crate::types::Document;

use super::family::parse_family;
use super::header::parse_header;
use super::individual::parse_individual;
use super::tag::Tag;
use super::tree::parse_raw_lines;
use super::types::Record;

/// Options controlling how lenient the tokenizer is.
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    /// Accept user tags that shadow standard tag names (`_NAME`).
    pub allow_redefined: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            allow_redefined: true,
        }
    }
}

/// Parser state for a single file.
#[derive(Debug, Default)]
pub struct ParseSession {
    options: ParseOptions,
    xrefs: XrefTable,
    warnings: WarningLog,
    header_index: Option<usize>,
    individual_indices: Vec<usize>,
    family_indices: Vec<usize>,
}

impl ParseSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn allow_redefined(&self) -> bool {
        self.options.allow_redefined
    }

    pub fn xrefs(&self) -> &XrefTable {
        &self.xrefs
    }

    pub(crate) fn xrefs_mut(&mut self) -> &mut XrefTable {
        &mut self.xrefs
    }

    pub fn warnings(&self) -> &WarningLog {
        &self.warnings
    }

    pub(crate) fn warnings_mut(&mut self) -> &mut WarningLog {
        &mut self.warnings
    }

    pub fn header_index(&self) -> Option<usize> {
        self.header_index
    }

    pub fn individual_indices(&self) -> &[usize] {
        &self.individual_indices
    }

    pub fn family_indices(&self) -> &[usize] {
        &self.family_indices
    }

    /// Bucket a top-level record by role. Called by the hierarchy
    /// builder with the record's eventual index in the forest.
    pub(crate) fn bucket_top_level(&mut self, record: &Record, index: usize) {
        if record.ignorable {
            return;
        }
        match record.standard_tag() {
            Some(Tag::Indi) => self.individual_indices.push(index),
            Some(Tag::Fam) => self.family_indices.push(index),
            Some(Tag::Head) => self.header_index = Some(index),
            _ => {}
        }
    }

    /// Run the full pipeline over a file's lines: build the record
    /// forest, parse the header, parse every individual (filling the
    /// arena), then parse every family against that arena.
    pub fn parse(&mut self, lines: &[String]) -> Result<Document> {
        let forest = parse_raw_lines(lines, self)?;

        let header = match self.header_index {
            Some(index) => Some(parse_header(&forest[index], self)?),
            None => None,
        };

        // All individuals are built before any family: family parsing
        // resolves HUSB/WIFE/CHIL through the arena.
        let mut individuals = Vec::new();
        let mut arena = IndividualArena::new();
        for index in self.individual_indices.clone() {
            let individual = parse_individual(&forest[index], self)?;
            if !individual.id.is_empty() {
                arena.insert(individual.id.clone(), individuals.len());
            }
            individuals.push(individual);
        }

        let mut families = Vec::new();
        for index in self.family_indices.clone() {
            families.push(parse_family(&forest[index], &arena, self)?);
        }

        Ok(Document {
            header,
            individuals,
            families,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GedError;
    use crate::types::Sex;
    use pretty_assertions::assert_eq;

    fn lines(source: &[&str]) -> Vec<String> {
        source.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_full_pipeline() {
        let mut session = ParseSession::new();
        let document = session
            .parse(&lines(&[
                "0 HEAD",
                "1 GEDC",
                "2 VERS 5.5.5",
                "0 @I1@ INDI",
                "1 NAME John /Smith/",
                "1 SEX M",
                "0 @I2@ INDI",
                "1 NAME Jane /Doe/",
                "1 SEX F",
                "0 @F1@ FAM",
                "1 HUSB @I1@",
                "1 WIFE @I2@",
                "0 TRLR",
            ]))
            .unwrap();

        assert!(document.header.is_some());
        assert_eq!(document.individuals.len(), 2);
        assert_eq!(document.individuals[0].sex, Sex::Male);
        assert_eq!(document.families.len(), 1);
        assert_eq!(
            document.families[0].parent_one.as_deref(),
            Some("@I1@")
        );
        assert!(session.warnings().is_empty());
    }

    #[test]
    fn test_forward_reference_resolves() {
        // The family appears before the individuals it points at.
        let mut session = ParseSession::new();
        let document = session
            .parse(&lines(&[
                "0 @F1@ FAM",
                "1 CHIL @I1@",
                "0 @I1@ INDI",
                "1 SEX F",
            ]))
            .unwrap();

        assert_eq!(document.families[0].children, vec!["@I1@"]);
    }

    #[test]
    fn test_duplicate_id_halts_with_no_entities() {
        let mut session = ParseSession::new();
        let result = session.parse(&lines(&[
            "0 @I1@ INDI",
            "0 @I1@ INDI",
        ]));

        assert!(matches!(
            result,
            Err(GedError::DuplicateCrossReference { .. })
        ));
    }

    #[test]
    fn test_family_pointing_at_missing_individual_fails() {
        let mut session = ParseSession::new();
        let result = session.parse(&lines(&["0 @F1@ FAM", "1 HUSB @I1@"]));
        assert!(matches!(result, Err(GedError::UnresolvedPointer { .. })));
    }

    #[test]
    fn test_obsolete_record_warns_and_is_excluded() {
        let mut session = ParseSession::new();
        let document = session
            .parse(&lines(&["0 @X1@ SSN 123-45-6789", "0 @I1@ INDI"]))
            .unwrap();

        assert_eq!(document.individuals.len(), 1);
        assert_eq!(session.warnings().len(), 1);
    }

    #[test]
    fn test_strict_tags_reject_redefinition() {
        let mut session = ParseSession::with_options(ParseOptions {
            allow_redefined: false,
        });
        let result = session.parse(&lines(&["0 @I1@ INDI", "1 _NAME shadow"]));
        assert!(matches!(result, Err(GedError::InvalidTag { .. })));
    }
}
