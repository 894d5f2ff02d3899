//! Parsing pipeline for GEDCOM files.
//!
//! The pipeline runs in fixed stages over one file:
//!
//! 1. Each raw line is tokenized into a [`Record`] (level, optional
//!    defining id, tag, pointer or value), registering defining ids into
//!    the session's cross-reference table.
//! 2. The hierarchy builder folds the records into a forest mirroring
//!    the level indentation, bucketing top-level records by role.
//! 3. The structure parsers walk record subtrees into typed entities:
//!    the header first, then every individual, then every family (which
//!    resolves its pointers against the already-built individuals).
//!
//! # Usage
//!
//! ```ignore
//! use ged::parser::ParseSession;
//!
//! let lines = ged::discovery::read_lines("royal.ged")?;
//! let mut session = ParseSession::new();
//! let document = session.parse(&lines)?;
//! ```

mod address;
mod date;
mod event;
mod family;
mod header;
mod individual;
mod line;
mod name;
mod place;
mod session;
pub mod tag;
mod tree;
mod types;

pub use address::parse_address;
pub use date::parse_date_value;
pub use event::{parse_attribute, parse_family_event, parse_individual_event};
pub use family::parse_family;
pub use header::parse_header;
pub use individual::parse_individual;
pub use line::parse_raw_line;
pub use name::parse_name;
pub use place::parse_place;
pub use session::{ParseOptions, ParseSession};
pub use tree::parse_raw_lines;
pub use types::Record;

use tag::Tag;

/// Resolve a record's text value including `CONT` (newline) and `CONC`
/// (splice) continuation children.
fn resolved_text(record: &Record) -> String {
    let mut text = record.line_value.clone();
    for child in record.semantic_children() {
        match child.standard_tag() {
            Some(Tag::Cont) => {
                text.push('\n');
                text.push_str(&child.line_value);
            }
            Some(Tag::Conc) => text.push_str(&child.line_value),
            _ => {}
        }
    }
    text
}
