//! Event and attribute structures shared by individuals and families.

use serde::Serialize;

use super::address::Address;
use super::date::Date;
use super::place::Place;

/// The privacy restriction a record can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Restriction {
    Privacy,
    Confidential,
    Locked,
}

impl Restriction {
    pub fn from_value(value: &str) -> Option<Restriction> {
        match value {
            "privacy" => Some(Restriction::Privacy),
            "confidential" => Some(Restriction::Confidential),
            "locked" => Some(Restriction::Locked),
            _ => None,
        }
    }
}

/// The detail fields common to every event kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetail {
    /// The event name implied by the record tag (e.g. "Birth").
    pub explicit_type: String,
    /// A classifier supplied by a `TYPE` substructure.
    pub generic_type: Option<String>,
    /// The value on the event line itself, if any.
    pub line_value: Option<String>,
    pub date: Option<Date>,
    pub place: Option<Place>,
    pub address: Option<Address>,
    pub agency: Option<String>,
    pub religious_affiliation: Option<String>,
    pub cause: Option<String>,
    pub restriction: Option<Restriction>,
    pub note: Option<String>,
    pub source_citation: Option<String>,
    pub multimedia_link: Option<String>,
}

/// An event in an individual's life.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndividualEvent {
    #[serde(flatten)]
    pub detail: EventDetail,
    /// Age of the individual at the event, verbatim.
    pub age: Option<String>,
    /// `FAMC` pointer for birth/christening/adoption events.
    pub child_of_family: Option<String>,
    /// Which parent(s) adopted, from `ADOP` under `FAMC`.
    pub adopted_by: Option<String>,
}

/// An event in a family's life.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyEvent {
    #[serde(flatten)]
    pub detail: EventDetail,
    /// `HUSB`/`AGE` substructure value.
    pub parent_one_age: Option<String>,
    /// `WIFE`/`AGE` substructure value.
    pub parent_two_age: Option<String>,
}

/// An attribute of an individual (occupation, caste, title, ...).
/// Attributes carry the same detail substructure as events.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    #[serde(flatten)]
    pub detail: EventDetail,
    /// The attribute name implied by the record tag (e.g. "Occupation").
    pub kind: String,
    /// The attribute value from the line.
    pub value: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restriction_values() {
        assert_eq!(Restriction::from_value("privacy"), Some(Restriction::Privacy));
        assert_eq!(Restriction::from_value("locked"), Some(Restriction::Locked));
        assert_eq!(Restriction::from_value(""), None);
        assert_eq!(Restriction::from_value("secret"), None);
    }

    #[test]
    fn test_flattened_serialization() {
        let event = IndividualEvent {
            detail: EventDetail {
                explicit_type: "Birth".to_string(),
                ..EventDetail::default()
            },
            age: Some("0y".to_string()),
            ..IndividualEvent::default()
        };

        let value = serde_json::to_value(&event).unwrap();
        // Detail fields sit at the top level alongside the wrapper's own.
        assert_eq!(value["explicitType"], "Birth");
        assert_eq!(value["age"], "0y");
    }
}
