//! The file header entity.

use serde::Serialize;

use super::address::Address;
use super::date::Date;

/// The `SOUR`/`CORP` corporation sub-block.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Corporation {
    pub business_name: String,
    pub business_address: Option<Address>,
}

/// The `SOUR`/`DATA` source-data sub-block.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceData {
    pub source_name: String,
    pub publication_date: Option<Date>,
    pub copyright: Option<String>,
}

/// The `SOUR` block describing the producing system.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderSource {
    pub system_id: String,
    pub version: Option<String>,
    pub product_name: Option<String>,
    pub corporation: Option<Corporation>,
    pub source_data: Option<SourceData>,
}

/// The `GEDC` version/form sub-block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GedcomMeta {
    pub version: Option<String>,
    pub form: Option<String>,
}

/// The `CHAR` character-set sub-block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSet {
    pub name: String,
    pub version: Option<String>,
}

/// File-level metadata parsed from the `HEAD` record.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub source: Option<HeaderSource>,
    pub receiving_system: Option<String>,
    pub transmission_date: Option<Date>,
    pub transmission_time: Option<String>,
    /// `SUBM` pointer.
    pub submitted_by: Option<String>,
    /// `SUBN` pointer.
    pub submitting_to: Option<String>,
    pub file_name: Option<String>,
    pub copyright: Option<String>,
    pub gedcom_meta: Option<GedcomMeta>,
    pub character_set: Option<CharacterSet>,
    pub language: Option<String>,
    /// Jurisdiction labels from `PLAC`/`FORM`, comma-split.
    pub place_hierarchy: Vec<String>,
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_header_is_bare() {
        let header = Header::default();
        assert!(header.source.is_none());
        assert!(header.place_hierarchy.is_empty());
    }
}
