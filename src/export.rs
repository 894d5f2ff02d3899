//! JSON export with empty-value pruning.
//!
//! Entities serialize through serde into a `serde_json::Value` tree,
//! then a recursive cleanup pass drops every key whose value is null, a
//! blank string, or an empty array/object. Callers select any subset of
//! the three output sections; selecting none means all.

use serde_json::{Map, Value};

use crate::error::{GedError, Result};
use crate::types::Document;

/// A selectable output section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Individuals,
    Families,
    Metadata,
}

impl Section {
    /// Parse a section name as given on the command line.
    pub fn from_name(name: &str) -> Option<Section> {
        match name {
            "individuals" => Some(Section::Individuals),
            "families" => Some(Section::Families),
            "metadata" => Some(Section::Metadata),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Section::Individuals => "individuals",
            Section::Families => "families",
            Section::Metadata => "metadata",
        }
    }
}

/// Serialize the selected sections of a document to a pruned JSON value.
pub fn to_json(document: &Document, sections: &[Section]) -> Value {
    let wanted = |section: Section| sections.is_empty() || sections.contains(&section);
    let mut root = Map::new();

    if wanted(Section::Metadata) {
        if let Some(header) = &document.header {
            if let Some(value) = prune(to_value(header)) {
                root.insert("metadata".to_string(), value);
            }
        }
    }

    if wanted(Section::Individuals) && !document.individuals.is_empty() {
        if let Some(value) = prune(to_value(&document.individuals)) {
            root.insert("individuals".to_string(), value);
        }
    }

    if wanted(Section::Families) && !document.families.is_empty() {
        if let Some(value) = prune(to_value(&document.families)) {
            root.insert("families".to_string(), value);
        }
    }

    Value::Object(root)
}

/// Serialize to a JSON string, optionally pretty-printed.
pub fn to_json_string(document: &Document, sections: &[Section], pretty: bool) -> Result<String> {
    let value = to_json(document, sections);
    let rendered = if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };
    rendered.map_err(|e| GedError::Parse {
        message: format!("Failed to render JSON: {}", e),
        help: None,
    })
}

fn to_value<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

/// Recursively drop empty values. Returns `None` when the value itself
/// prunes away: null, a blank string, or an empty container. Booleans
/// and numbers always survive.
pub fn prune(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::String(text) => {
            if text.trim().is_empty() {
                None
            } else {
                Some(Value::String(text))
            }
        }
        Value::Array(items) => {
            let kept: Vec<Value> = items.into_iter().filter_map(prune).collect();
            if kept.is_empty() {
                None
            } else {
                Some(Value::Array(kept))
            }
        }
        Value::Object(entries) => {
            let kept: Map<String, Value> = entries
                .into_iter()
                .filter_map(|(key, value)| prune(value).map(|value| (key, value)))
                .collect();
            if kept.is_empty() {
                None
            } else {
                Some(Value::Object(kept))
            }
        }
        other => Some(other),
    }
}
