//! The individual entity.

use serde::Serialize;

use super::event::{Attribute, IndividualEvent, Restriction};
use super::name::Name;

/// The sex of an individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Sex {
    Male,
    Female,
    #[default]
    Unknown,
    Intersex,
    #[serde(rename = "Not Recorded")]
    NotRecorded,
}

impl Sex {
    /// Match a `SEX` line value. An empty value reads as unknown;
    /// anything outside the standard codes is rejected.
    pub fn from_value(value: &str) -> Option<Sex> {
        match value {
            "" | "U" => Some(Sex::Unknown),
            "M" => Some(Sex::Male),
            "F" => Some(Sex::Female),
            "X" => Some(Sex::Intersex),
            "N" => Some(Sex::NotRecorded),
            _ => None,
        }
    }
}

/// A link from an individual to a family they are a child of.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyLink {
    /// Cross-reference identifier of the family.
    pub family: String,
    /// Pedigree linkage (`birth`, `adopted`, `foster`, ...), verbatim.
    pub pedigree: Option<String>,
}

/// An individual record: names, sex, events, attributes and family
/// links, identified by its cross-reference id.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Individual {
    pub id: String,
    pub restriction: Option<Restriction>,
    pub sex: Sex,
    pub names: Vec<Name>,
    pub events: Vec<IndividualEvent>,
    pub attributes: Vec<Attribute>,
    /// Families this individual is a child of.
    pub child_of_families: Vec<FamilyLink>,
    /// Families this individual is a spouse in, by identifier.
    pub spouse_families: Vec<String>,
    pub note: Option<String>,
    pub source_citation: Option<String>,
}

impl Individual {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// The display value of the first name, if any.
    pub fn primary_name(&self) -> Option<&str> {
        self.names.first().map(|name| name.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_values() {
        assert_eq!(Sex::from_value("M"), Some(Sex::Male));
        assert_eq!(Sex::from_value("F"), Some(Sex::Female));
        assert_eq!(Sex::from_value("U"), Some(Sex::Unknown));
        assert_eq!(Sex::from_value(""), Some(Sex::Unknown));
        assert_eq!(Sex::from_value("X"), Some(Sex::Intersex));
        assert_eq!(Sex::from_value("N"), Some(Sex::NotRecorded));
        assert_eq!(Sex::from_value("male"), None);
    }

    #[test]
    fn test_primary_name() {
        let mut individual = Individual::new("@I1@");
        assert!(individual.primary_name().is_none());

        individual.names.push(crate::types::Name {
            value: "John Smith".to_string(),
            ..Default::default()
        });
        assert_eq!(individual.primary_name(), Some("John Smith"));
    }
}
