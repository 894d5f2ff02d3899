//! Cross-reference resolution for parsed records.
//!
//! The table maps every `@...@` identifier to a lightweight entry
//! describing the record that defines it; the arena maps identifiers of
//! already-built individuals to their position in the parsed list.
//! Family resolution consults both: the table answers "does this pointer
//! name anything at all", the arena answers "is it an individual we have
//! constructed".

mod arena;
mod xref;

pub use arena::IndividualArena;
pub use xref::{RecordKind, XrefEntry, XrefTable};
