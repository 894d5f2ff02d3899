//! Header parsing.
//!
//! The header is a fixed-shape structure: an unexpected standard tag
//! among its direct children is fatal, unlike the tolerant substructure
//! parsers. User-extension children are skipped - private `_X` tags are
//! legal anywhere and real exports carry plenty of them.

use crate::error::{GedError, Result};
use crate::types::{
    CharacterSet, Corporation, GedcomMeta, Header, HeaderSource, SourceData,
};

use super::address::parse_address;
use super::date::parse_date_value;
use super::session::ParseSession;
use super::tag::{Tag, TagKind};
use super::types::Record;

/// Parse the `HEAD` record subtree.
pub fn parse_header(record: &Record, session: &mut ParseSession) -> Result<Header> {
    let mut header = Header::default();

    for child in record.semantic_children() {
        let tag = match &child.tag {
            TagKind::Standard(tag) => *tag,
            // Private extensions are tolerated; obsolete records never
            // reach here.
            _ => continue,
        };

        match tag {
            Tag::Sour => header.source = Some(parse_source(child, session)?),
            Tag::Dest => header.receiving_system = Some(child.line_value.clone()),
            Tag::Date => {
                header.transmission_date =
                    Some(parse_date_value(&child.line_value, child.line, session)?);
                if let Some(time) = child.child(Tag::Time) {
                    header.transmission_time = Some(time.line_value.clone());
                }
            }
            Tag::Subm => header.submitted_by = child.cross_ref_ptr.clone(),
            Tag::Subn => header.submitting_to = child.cross_ref_ptr.clone(),
            Tag::File => header.file_name = Some(child.line_value.clone()),
            Tag::Copr => header.copyright = Some(child.line_value.clone()),
            Tag::Gedc => {
                let mut meta = GedcomMeta::default();
                if let Some(version) = child.child(Tag::Vers) {
                    meta.version = Some(version.line_value.clone());
                }
                if let Some(form) = child.child(Tag::Form) {
                    meta.form = Some(form.line_value.clone());
                }
                header.gedcom_meta = Some(meta);
            }
            Tag::Char => {
                let mut charset = CharacterSet {
                    name: child.line_value.clone(),
                    ..CharacterSet::default()
                };
                if let Some(version) = child.child(Tag::Vers) {
                    charset.version = Some(version.line_value.clone());
                }
                header.character_set = Some(charset);
            }
            Tag::Lang => header.language = Some(child.line_value.clone()),
            Tag::Plac => {
                if let Some(form) = child.child(Tag::Form) {
                    header.place_hierarchy = form
                        .line_value
                        .split(',')
                        .map(|label| label.trim().to_string())
                        .filter(|label| !label.is_empty())
                        .collect();
                }
            }
            Tag::Note => header.note = Some(super::resolved_text(child)),
            other => {
                return Err(GedError::UnrecognizedTag {
                    tag: other.to_string(),
                    context: "header",
                    line: child.line,
                });
            }
        }
    }

    Ok(header)
}

/// Parse the `SOUR` block describing the producing system.
fn parse_source(record: &Record, session: &mut ParseSession) -> Result<HeaderSource> {
    let mut source = HeaderSource {
        system_id: record.line_value.clone(),
        ..HeaderSource::default()
    };

    for child in record.semantic_children() {
        match child.standard_tag() {
            Some(Tag::Vers) => source.version = Some(child.line_value.clone()),
            Some(Tag::Name) => source.product_name = Some(child.line_value.clone()),
            Some(Tag::Corp) => {
                let mut corporation = Corporation {
                    business_name: child.line_value.clone(),
                    ..Corporation::default()
                };
                if let Some(addr) = child.child(Tag::Addr) {
                    corporation.business_address = Some(parse_address(addr));
                }
                source.corporation = Some(corporation);
            }
            Some(Tag::Data) => {
                let mut data = SourceData {
                    source_name: child.line_value.clone(),
                    ..SourceData::default()
                };
                if let Some(date) = child.child(Tag::Date) {
                    data.publication_date =
                        Some(parse_date_value(&date.line_value, date.line, session)?);
                }
                if let Some(copyright) = child.child(Tag::Copr) {
                    data.copyright = Some(copyright.line_value.clone());
                }
                source.source_data = Some(data);
            }
            _ => {}
        }
    }

    Ok(source)
}
