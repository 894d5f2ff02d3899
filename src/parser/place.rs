//! Place structure parsing.

use crate::types::Place;

use super::tag::Tag;
use super::types::Record;

/// Parse a `PLAC` record subtree. The line value is the display name;
/// its comma-separated components form the jurisdiction hierarchy.
/// Coordinates come from a `MAP` child or, in older files, from `LATI`
/// and `LONG` children directly. Unknown children are skipped.
pub fn parse_place(record: &Record) -> Place {
    let mut place = Place {
        name: record.line_value.clone(),
        ..Place::default()
    };

    place.hierarchy = record
        .line_value
        .split(',')
        .map(|component| component.trim().to_string())
        .filter(|component| !component.is_empty())
        .collect();

    for child in record.semantic_children() {
        match child.standard_tag() {
            Some(Tag::Map) => read_coordinates(child, &mut place),
            Some(Tag::Lati) => place.latitude = Some(child.line_value.clone()),
            Some(Tag::Long) => place.longitude = Some(child.line_value.clone()),
            _ => {}
        }
    }

    place
}

fn read_coordinates(map: &Record, place: &mut Place) {
    for child in map.semantic_children() {
        match child.standard_tag() {
            Some(Tag::Lati) => place.latitude = Some(child.line_value.clone()),
            Some(Tag::Long) => place.longitude = Some(child.line_value.clone()),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::session::ParseSession;
    use crate::parser::tree::parse_raw_lines;
    use pretty_assertions::assert_eq;

    fn parse_subtree(source: &[&str]) -> Place {
        let lines: Vec<String> = source.iter().map(|s| s.to_string()).collect();
        let mut session = ParseSession::new();
        let forest = parse_raw_lines(&lines, &mut session).unwrap();
        parse_place(&forest[0])
    }

    #[test]
    fn test_name_and_hierarchy() {
        let place = parse_subtree(&["2 PLAC Ottawa, Ontario, Canada"]);
        assert_eq!(place.name, "Ottawa, Ontario, Canada");
        assert_eq!(place.hierarchy, vec!["Ottawa", "Ontario", "Canada"]);
    }

    #[test]
    fn test_map_coordinates() {
        let place = parse_subtree(&[
            "2 PLAC Ottawa",
            "3 MAP",
            "4 LATI N45.4215",
            "4 LONG W75.6972",
        ]);
        assert_eq!(place.latitude.as_deref(), Some("N45.4215"));
        assert_eq!(place.longitude.as_deref(), Some("W75.6972"));
    }

    #[test]
    fn test_flat_coordinates() {
        let place = parse_subtree(&["2 PLAC Ottawa", "3 LATI N45.4215", "3 LONG W75.6972"]);
        assert_eq!(place.latitude.as_deref(), Some("N45.4215"));
        assert_eq!(place.longitude.as_deref(), Some("W75.6972"));
    }

    #[test]
    fn test_empty_place() {
        let place = parse_subtree(&["2 PLAC"]);
        assert!(place.name.is_empty());
        assert!(place.hierarchy.is_empty());
    }
}
