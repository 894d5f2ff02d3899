//! Core domain types for ged.
//!
//! The entity model the structure parsers produce: individuals,
//! families, names, events, dates, places, addresses and the file
//! header. Entities are built once by their parser and never mutated
//! afterwards.

mod address;
mod date;
mod document;
mod event;
mod family;
mod header;
mod individual;
mod name;
mod place;

pub use address::Address;
pub use date::{Approximation, Calendar, Date, DateKind, DatePart, DateSpan, Month};
pub use document::Document;
pub use event::{Attribute, EventDetail, FamilyEvent, IndividualEvent, Restriction};
pub use family::Family;
pub use header::{CharacterSet, Corporation, GedcomMeta, Header, HeaderSource, SourceData};
pub use individual::{FamilyLink, Individual, Sex};
pub use name::{Name, NamePieces, NameType, NameVariant};
pub use place::Place;
