//! The parsed document: everything a GEDCOM file yields.

use serde::Serialize;

use super::family::Family;
use super::header::Header;
use super::individual::Individual;

/// The complete product of parsing one file.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub header: Option<Header>,
    pub individuals: Vec<Individual>,
    pub families: Vec<Family>,
}

impl Document {
    /// Whether nothing was parsed.
    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.individuals.is_empty() && self.families.is_empty()
    }
}
