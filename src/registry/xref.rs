//! The cross-reference table built during line tokenization.

use std::collections::HashMap;
use std::fmt;

use crate::error::{GedError, Result};

/// The top-level role of a defining record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Individual,
    Family,
    Header,
    Other,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordKind::Individual => "individual",
            RecordKind::Family => "family",
            RecordKind::Header => "header",
            RecordKind::Other => "record",
        };
        write!(f, "{}", name)
    }
}

/// What the table knows about a defining record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XrefEntry {
    pub kind: RecordKind,
    /// 1-based source line of the defining record.
    pub line: usize,
}

/// Map from cross-reference identifier to its defining record.
///
/// Write-once-per-key during the hierarchy-builder pass, read-only
/// during structure parsing.
#[derive(Debug, Clone, Default)]
pub struct XrefTable {
    entries: HashMap<String, XrefEntry>,
}

impl XrefTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the identifier is already defined.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Register a defining record. A second definition of the same
    /// identifier is fatal.
    pub fn insert(&mut self, id: &str, entry: XrefEntry) -> Result<()> {
        if self.entries.contains_key(id) {
            return Err(GedError::DuplicateCrossReference {
                id: id.to_string(),
                line: entry.line,
            });
        }
        self.entries.insert(id.to_string(), entry);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&XrefEntry> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(kind: RecordKind, line: usize) -> XrefEntry {
        XrefEntry { kind, line }
    }

    #[test]
    fn test_insert_and_get() {
        let mut table = XrefTable::new();
        table
            .insert("@I1@", entry(RecordKind::Individual, 1))
            .unwrap();

        assert!(table.contains("@I1@"));
        assert_eq!(table.get("@I1@").unwrap().kind, RecordKind::Individual);
        assert!(table.get("@I2@").is_none());
    }

    #[test]
    fn test_duplicate_is_fatal() {
        let mut table = XrefTable::new();
        table
            .insert("@I1@", entry(RecordKind::Individual, 1))
            .unwrap();

        let err = table
            .insert("@I1@", entry(RecordKind::Family, 8))
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::GedError::DuplicateCrossReference { ref id, line: 8 } if id == "@I1@"
        ));
    }
}
