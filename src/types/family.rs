//! The family entity.

use serde::Serialize;

use super::event::{FamilyEvent, Restriction};

/// A family record: up to two parents and any number of children, all
/// referenced by cross-reference identifier, plus the family's events.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Family {
    pub id: String,
    pub restriction: Option<Restriction>,
    pub parent_one: Option<String>,
    pub parent_two: Option<String>,
    /// Child identifiers in source order.
    pub children: Vec<String>,
    pub events: Vec<FamilyEvent>,
    /// The `NCHI` count, verbatim.
    pub number_of_children: Option<String>,
    pub note: Option<String>,
    pub source_citation: Option<String>,
}

impl Family {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_family() {
        let family = Family::new("@F1@");
        assert_eq!(family.id, "@F1@");
        assert!(family.parent_one.is_none());
        assert!(family.children.is_empty());
    }
}
