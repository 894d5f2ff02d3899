//! Line tokenization.
//!
//! Splits one raw GEDCOM line on whitespace runs and decodes it into a
//! [`Record`] following the line protocol: level, optional defining
//! cross-reference id, tag, then a pointer or free-text value.

use crate::error::{GedError, Result};
use crate::registry::{RecordKind, XrefEntry};

use super::session::ParseSession;
use super::tag::{self, Tag, TagKind};
use super::types::Record;

/// Parse a single raw line into a record, registering any defining
/// cross-reference id into the session's table.
pub fn parse_raw_line(
    raw_line: &str,
    line_num: usize,
    session: &mut ParseSession,
) -> Result<Record> {
    let tokens: Vec<&str> = raw_line.split_whitespace().collect();
    let mut index = 0;

    // First token must be a level.
    let level_token = tokens.first().copied().unwrap_or("");
    if !tag::is_valid_level(level_token) {
        return Err(GedError::InvalidLevel {
            token: level_token.to_string(),
            line: line_num,
        });
    }
    let level: u8 = level_token.parse().map_err(|_| GedError::InvalidLevel {
        token: level_token.to_string(),
        line: line_num,
    })?;
    index += 1;

    // Optional defining cross-reference id. Syntax alone is not enough:
    // an @...@ token with bad interior characters is fatal, and a
    // redefinition of a known id is fatal.
    let mut cross_ref_id: Option<String> = None;
    if let Some(&token) = tokens.get(index) {
        if tag::has_xref_syntax(token) {
            if !tag::is_valid_xref_id(token) {
                return Err(GedError::InvalidCrossReference {
                    token: token.to_string(),
                    line: line_num,
                });
            }
            if session.xrefs().contains(token) {
                return Err(GedError::DuplicateCrossReference {
                    id: token.to_string(),
                    line: line_num,
                });
            }
            cross_ref_id = Some(token.to_string());
            index += 1;
        }
    }

    // Next token must be a tag.
    let tag_token = tokens.get(index).copied().unwrap_or("");
    let Some(kind) = tag::classify_tag(tag_token, session.allow_redefined()) else {
        return Err(GedError::InvalidTag {
            token: tag_token.to_string(),
            line: line_num,
        });
    };
    index += 1;

    let mut record = Record::new(level, kind, line_num);
    record.cross_ref_id = cross_ref_id;

    if matches!(record.tag, TagKind::Obsolete(_)) {
        record.ignorable = true;
        session.warnings_mut().warn(
            "ged::parse::obsolete-tag",
            format!(
                "Record ignored with the obsolete tag {} in line {}",
                tag_token, line_num
            ),
        );
    }

    // Register the defining id now that the record's role is known.
    if let Some(id) = record.cross_ref_id.clone() {
        session.xrefs_mut().insert(
            &id,
            XrefEntry {
                kind: record_kind(&record),
                line: line_num,
            },
        )?;
    }

    // Remaining tokens: a valid pointer, or free text joined with
    // single spaces.
    for &token in tokens.iter().skip(index) {
        if tag::has_xref_syntax(token) && tag::is_valid_xref_id(token) {
            if record.cross_ref_id.is_some() {
                return Err(GedError::DuplicatePointerAndReference { line: line_num });
            }
            record.cross_ref_ptr = Some(token.to_string());
        } else {
            if !record.line_value.is_empty() {
                record.line_value.push(' ');
            }
            record.line_value.push_str(token);
        }
    }

    Ok(record)
}

/// The table role of a defining record.
fn record_kind(record: &Record) -> RecordKind {
    if record.ignorable {
        return RecordKind::Other;
    }
    match record.standard_tag() {
        Some(Tag::Indi) => RecordKind::Individual,
        Some(Tag::Fam) => RecordKind::Family,
        Some(Tag::Head) => RecordKind::Header,
        _ => RecordKind::Other,
    }
}
