//! The raw record type produced by line tokenization.

use std::fmt;

use super::tag::TagKind;

/// One decoded physical line of a GEDCOM file.
///
/// Records own their children; the hierarchy builder owns the whole
/// forest and lends subtrees to the structure parsers by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Indentation level, 0..=99.
    pub level: u8,

    /// The classified tag.
    pub tag: TagKind,

    /// Free-text remainder of the line, tokens rejoined with single
    /// spaces and no trailing space.
    pub line_value: String,

    /// The cross-reference identifier this line defines, when present.
    pub cross_ref_id: Option<String>,

    /// The cross-reference identifier this line points at, when present.
    pub cross_ref_ptr: Option<String>,

    /// True for obsolete tags: kept in the tree, excluded from semantic
    /// parsing.
    pub ignorable: bool,

    /// 1-based source line number, for diagnostics.
    pub line: usize,

    /// Child records in source order.
    pub children: Vec<Record>,
}

impl Record {
    /// Create a record with a level, tag and source line; the tokenizer
    /// fills in the rest.
    pub fn new(level: u8, tag: TagKind, line: usize) -> Self {
        Self {
            level,
            tag,
            line_value: String::new(),
            cross_ref_id: None,
            cross_ref_ptr: None,
            ignorable: false,
            line,
            children: Vec::new(),
        }
    }

    /// The standard tag of this record, if it carries one.
    pub fn standard_tag(&self) -> Option<super::tag::Tag> {
        self.tag.standard()
    }

    /// Iterate over children that take part in semantic parsing
    /// (obsolete-tagged records are skipped).
    pub fn semantic_children(&self) -> impl Iterator<Item = &Record> {
        self.children.iter().filter(|child| !child.ignorable)
    }

    /// Find the first semantic child with the given standard tag.
    pub fn child(&self, tag: super::tag::Tag) -> Option<&Record> {
        self.semantic_children()
            .find(|child| child.standard_tag() == Some(tag))
    }
}

impl fmt::Display for Record {
    /// Renders the record as it would appear in the source file.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level)?;
        if let Some(id) = &self.cross_ref_id {
            write!(f, " {}", id)?;
        }
        write!(f, " {}", self.tag)?;
        if !self.line_value.is_empty() {
            write!(f, " {}", self.line_value)?;
        } else if let Some(ptr) = &self.cross_ref_ptr {
            write!(f, " {}", ptr)?;
        }
        Ok(())
    }
}
