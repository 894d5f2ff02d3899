//! Event detail parsing, shared by individual events, family events and
//! attributes.
//!
//! Every event kind carries the same detail substructure (date, place,
//! address, agency, cause, note, citations); the wrappers add their own
//! children on top. Unknown children are silently skipped.

use crate::error::Result;
use crate::types::{Attribute, EventDetail, FamilyEvent, IndividualEvent, Restriction};

use super::address::parse_address;
use super::date::parse_date_value;
use super::name::pointer_or_value;
use super::place::parse_place;
use super::session::ParseSession;
use super::tag::Tag;
use super::types::Record;

/// Parse the shared detail substructure of an event record.
fn parse_event_detail(
    record: &Record,
    explicit_type: &str,
    session: &mut ParseSession,
) -> Result<EventDetail> {
    let mut detail = EventDetail {
        explicit_type: explicit_type.to_string(),
        ..EventDetail::default()
    };
    if !record.line_value.is_empty() {
        detail.line_value = Some(record.line_value.clone());
    }

    for child in record.semantic_children() {
        match child.standard_tag() {
            Some(Tag::Type) => detail.generic_type = Some(child.line_value.clone()),
            Some(Tag::Date) => {
                detail.date = Some(parse_date_value(&child.line_value, child.line, session)?);
            }
            Some(Tag::Plac) => detail.place = Some(parse_place(child)),
            Some(Tag::Addr) => detail.address = Some(parse_address(child)),
            // Contact tags are siblings of ADDR in the grammar but
            // belong with the address in the entity model.
            Some(Tag::Phon) => {
                detail.address.get_or_insert_with(Default::default).phone =
                    Some(child.line_value.clone());
            }
            Some(Tag::Email) => {
                detail.address.get_or_insert_with(Default::default).email =
                    Some(child.line_value.clone());
            }
            Some(Tag::Fax) => {
                detail.address.get_or_insert_with(Default::default).fax =
                    Some(child.line_value.clone());
            }
            Some(Tag::Www) => {
                detail.address.get_or_insert_with(Default::default).web =
                    Some(child.line_value.clone());
            }
            Some(Tag::Agnc) => detail.agency = Some(child.line_value.clone()),
            Some(Tag::Reli) => detail.religious_affiliation = Some(child.line_value.clone()),
            Some(Tag::Caus) => detail.cause = Some(child.line_value.clone()),
            Some(Tag::Resn) => detail.restriction = Restriction::from_value(&child.line_value),
            Some(Tag::Note) => detail.note = Some(super::resolved_text(child)),
            Some(Tag::Sour) => detail.source_citation = Some(pointer_or_value(child)),
            Some(Tag::Obje) => detail.multimedia_link = Some(pointer_or_value(child)),
            _ => {}
        }
    }

    Ok(detail)
}

/// The event name: the line value wins over the tag's standard name, so
/// `1 EVEN Shipwreck` reads as a "Shipwreck" event.
fn event_name(record: &Record, standard_name: &str) -> String {
    if record.line_value.is_empty() {
        standard_name.to_string()
    } else {
        record.line_value.clone()
    }
}

/// Parse an individual event record (`BIRT`, `DEAT`, `EVEN`, ...).
pub fn parse_individual_event(
    record: &Record,
    standard_name: &str,
    session: &mut ParseSession,
) -> Result<IndividualEvent> {
    let mut event = IndividualEvent {
        detail: parse_event_detail(record, &event_name(record, standard_name), session)?,
        ..IndividualEvent::default()
    };

    for child in record.semantic_children() {
        match child.standard_tag() {
            Some(Tag::Age) => event.age = Some(child.line_value.clone()),
            Some(Tag::Famc) => {
                event.child_of_family = child.cross_ref_ptr.clone();
                if let Some(adop) = child.child(Tag::Adop) {
                    event.adopted_by = Some(adop.line_value.clone());
                }
            }
            _ => {}
        }
    }

    Ok(event)
}

/// Parse a family event record (`MARR`, `DIV`, `EVEN`, ...). Per-parent
/// ages come from `HUSB`/`WIFE` substructures carrying an `AGE` child.
pub fn parse_family_event(
    record: &Record,
    standard_name: &str,
    session: &mut ParseSession,
) -> Result<FamilyEvent> {
    let mut event = FamilyEvent {
        detail: parse_event_detail(record, &event_name(record, standard_name), session)?,
        ..FamilyEvent::default()
    };

    for child in record.semantic_children() {
        let age = child
            .child(Tag::Age)
            .map(|age| age.line_value.clone());
        match child.standard_tag() {
            Some(Tag::Husb) => event.parent_one_age = age,
            Some(Tag::Wife) => event.parent_two_age = age,
            _ => {}
        }
    }

    Ok(event)
}

/// Parse an individual attribute record (`OCCU`, `CAST`, `FACT`, ...).
/// The line value is the attribute's value; the detail substructure
/// rides along unchanged.
pub fn parse_attribute(
    record: &Record,
    standard_name: &str,
    session: &mut ParseSession,
) -> Result<Attribute> {
    let mut attribute = Attribute {
        detail: parse_event_detail(record, standard_name, session)?,
        kind: standard_name.to_string(),
        ..Attribute::default()
    };

    if !record.line_value.is_empty() {
        attribute.value = Some(record.line_value.clone());
    }
    if attribute.kind.is_empty() {
        // FACT has no standard name; the TYPE classifier supplies one.
        if let Some(generic) = &attribute.detail.generic_type {
            attribute.kind = generic.clone();
        }
    }

    Ok(attribute)
}
