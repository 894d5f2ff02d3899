//! Individual record parsing.
//!
//! Walks an `INDI` subtree into an [`Individual`]: names, sex, events,
//! attributes and family links. Unknown children are silently skipped.

use crate::error::{GedError, Result};
use crate::types::{FamilyLink, Individual, Restriction, Sex};

use super::event::{parse_attribute, parse_individual_event};
use super::name::{parse_name, pointer_or_value};
use super::session::ParseSession;
use super::tag::Tag;
use super::types::Record;

/// Parse one `INDI` record subtree.
pub fn parse_individual(record: &Record, session: &mut ParseSession) -> Result<Individual> {
    let mut individual = Individual::new(record.cross_ref_id.clone().unwrap_or_default());

    for child in record.semantic_children() {
        let Some(tag) = child.standard_tag() else {
            continue;
        };

        match tag {
            Tag::Name => individual.names.push(parse_name(child)?),
            Tag::Sex => {
                let Some(sex) = Sex::from_value(&child.line_value) else {
                    return Err(GedError::Parse {
                        message: format!(
                            "Invalid sex {} for individual {}",
                            child.line_value, individual.id
                        ),
                        help: Some("SEX takes one of M, F, U, X or N".to_string()),
                    });
                };
                individual.sex = sex;
            }
            Tag::Resn => individual.restriction = Restriction::from_value(&child.line_value),
            Tag::Famc => {
                let mut link = FamilyLink {
                    family: child.cross_ref_ptr.clone().unwrap_or_default(),
                    pedigree: None,
                };
                if let Some(pedigree) = child.child(Tag::Pedi) {
                    link.pedigree = Some(pedigree.line_value.clone());
                }
                individual.child_of_families.push(link);
            }
            Tag::Fams => {
                if let Some(ptr) = &child.cross_ref_ptr {
                    individual.spouse_families.push(ptr.clone());
                }
            }
            Tag::Note => individual.note = Some(super::resolved_text(child)),
            Tag::Sour => individual.source_citation = Some(pointer_or_value(child)),
            other => {
                if let Some(name) = other.individual_event_name() {
                    individual
                        .events
                        .push(parse_individual_event(child, name, session)?);
                } else if let Some(name) = other.attribute_name() {
                    individual
                        .attributes
                        .push(parse_attribute(child, name, session)?);
                }
            }
        }
    }

    Ok(individual)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tree::parse_raw_lines;
    use pretty_assertions::assert_eq;

    fn parse_subtree(source: &[&str]) -> (Result<Individual>, ParseSession) {
        let lines: Vec<String> = source.iter().map(|s| s.to_string()).collect();
        let mut session = ParseSession::new();
        let forest = parse_raw_lines(&lines, &mut session).unwrap();
        let result = parse_individual(&forest[0], &mut session);
        (result, session)
    }

    fn parse_ok(source: &[&str]) -> Individual {
        parse_subtree(source).0.unwrap()
    }

    #[test]
    fn test_basic_individual() {
        let individual = parse_ok(&["0 @I1@ INDI", "1 NAME John /Smith/", "1 SEX M"]);

        assert_eq!(individual.id, "@I1@");
        assert_eq!(individual.sex, Sex::Male);
        assert_eq!(individual.names.len(), 1);
        assert_eq!(individual.primary_name(), Some("John Smith"));
        assert_eq!(
            individual.names[0].pieces.surname.as_deref(),
            Some("Smith")
        );
    }

    #[test]
    fn test_empty_sex_reads_unknown() {
        let individual = parse_ok(&["0 @I1@ INDI", "1 SEX"]);
        assert_eq!(individual.sex, Sex::Unknown);
    }

    #[test]
    fn test_invalid_sex_is_fatal() {
        let (result, _) = parse_subtree(&["0 @I1@ INDI", "1 SEX male"]);
        assert!(matches!(result, Err(GedError::Parse { .. })));
    }

    #[test]
    fn test_events_and_attributes() {
        let individual = parse_ok(&[
            "0 @I1@ INDI",
            "1 BIRT",
            "2 DATE 15 JAN 1990",
            "1 OCCU Miller",
            "1 DEAT",
        ]);

        assert_eq!(individual.events.len(), 2);
        assert_eq!(individual.events[0].detail.explicit_type, "Birth");
        assert_eq!(individual.events[1].detail.explicit_type, "Death");
        assert_eq!(individual.attributes.len(), 1);
        assert_eq!(individual.attributes[0].kind, "Occupation");
    }

    #[test]
    fn test_family_links() {
        let individual = parse_ok(&[
            "0 @I1@ INDI",
            "1 FAMC @F1@",
            "2 PEDI birth",
            "1 FAMS @F2@",
        ]);

        assert_eq!(individual.child_of_families.len(), 1);
        assert_eq!(individual.child_of_families[0].family, "@F1@");
        assert_eq!(
            individual.child_of_families[0].pedigree.as_deref(),
            Some("birth")
        );
        assert_eq!(individual.spouse_families, vec!["@F2@"]);
    }

    #[test]
    fn test_restriction() {
        let individual = parse_ok(&["0 @I1@ INDI", "1 RESN confidential"]);
        assert_eq!(individual.restriction, Some(Restriction::Confidential));
    }

    #[test]
    fn test_unknown_children_skipped() {
        let individual = parse_ok(&["0 @I1@ INDI", "1 _UID abc123", "1 RIN 7"]);
        assert!(individual.names.is_empty());
        assert!(individual.events.is_empty());
    }

    #[test]
    fn test_note_with_continuation() {
        let individual = parse_ok(&[
            "0 @I1@ INDI",
            "1 NOTE First line",
            "2 CONT second line",
            "2 CONC , spliced",
        ]);
        assert_eq!(
            individual.note.as_deref(),
            Some("First line\nsecond line, spliced")
        );
    }
}
