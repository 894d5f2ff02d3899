//! ged - GEDCOM to JSON converter
//!
//! A library for parsing GEDCOM genealogy interchange files into a
//! typed entity graph and serializing selected parts of it to pruned
//! JSON.

pub mod cli;
pub mod diagnostics;
pub mod discovery;
pub mod error;
pub mod export;
pub mod output;
pub mod parser;
pub mod registry;
pub mod types;

pub use diagnostics::{Warning, WarningLog};
pub use discovery::{discover, discover_paths, read_lines, DiscoveryResult, Manifest};
pub use error::{GedError, Result};
pub use export::{prune, to_json, to_json_string, Section};
pub use parser::{ParseOptions, ParseSession, Record};
pub use registry::{IndividualArena, RecordKind, XrefEntry, XrefTable};
pub use types::{
    Address, Attribute, Calendar, Date, DateKind, DatePart, Document, EventDetail, Family,
    FamilyEvent, FamilyLink, Header, Individual, IndividualEvent, Name, NamePieces, NameType,
    Place, Restriction, Sex,
};
