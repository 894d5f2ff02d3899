//! Family record parsing.
//!
//! Walks a `FAM` subtree into a [`Family`]. Parent and child pointers
//! resolve through the cross-reference table and the individual arena:
//! a pointer naming nothing at all and a pointer naming something that
//! is not a built individual are distinguished fatal conditions. The
//! individual pass must have completed before any family is parsed.

use crate::error::{GedError, Result};
use crate::registry::IndividualArena;
use crate::types::{Family, Restriction};

use super::event::parse_family_event;
use super::name::pointer_or_value;
use super::session::ParseSession;
use super::tag::Tag;
use super::types::Record;

/// Parse one `FAM` record subtree.
pub fn parse_family(
    record: &Record,
    arena: &IndividualArena,
    session: &mut ParseSession,
) -> Result<Family> {
    let mut family = Family::new(record.cross_ref_id.clone().unwrap_or_default());

    for child in record.semantic_children() {
        let Some(tag) = child.standard_tag() else {
            continue;
        };

        match tag {
            Tag::Husb | Tag::Wife | Tag::Chil => {
                let id = resolve_individual(child, arena, session)?;
                match tag {
                    Tag::Husb => family.parent_one = Some(id),
                    Tag::Wife => family.parent_two = Some(id),
                    _ => family.children.push(id),
                }
            }
            Tag::Nchi => family.number_of_children = Some(child.line_value.clone()),
            Tag::Resn => family.restriction = Restriction::from_value(&child.line_value),
            Tag::Note => family.note = Some(super::resolved_text(child)),
            Tag::Sour => family.source_citation = Some(pointer_or_value(child)),
            other => {
                if let Some(name) = other.family_event_name() {
                    family
                        .events
                        .push(parse_family_event(child, name, session)?);
                }
            }
        }
    }

    Ok(family)
}

/// Resolve a `HUSB`/`WIFE`/`CHIL` pointer to a built individual's
/// identifier.
fn resolve_individual(
    child: &Record,
    arena: &IndividualArena,
    session: &ParseSession,
) -> Result<String> {
    let pointer = child.cross_ref_ptr.clone().unwrap_or_default();

    if session.xrefs().get(&pointer).is_none() {
        return Err(GedError::UnresolvedPointer {
            record: child.to_string(),
        });
    }
    if !arena.contains(&pointer) {
        return Err(GedError::PointerNotIndividual {
            record: child.to_string(),
        });
    }

    Ok(pointer)
}
