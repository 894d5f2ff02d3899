//! Address structure parsing.

use crate::types::Address;

use super::tag::Tag;
use super::types::Record;

/// Parse an `ADDR` record subtree. The line value, when present, is the
/// first address line; `ADR1`..`ADR3` children append further lines.
/// Unknown children are skipped.
pub fn parse_address(record: &Record) -> Address {
    let mut address = Address::default();

    if !record.line_value.is_empty() {
        address.address_lines.push(record.line_value.clone());
    }

    for child in record.semantic_children() {
        let value = child.line_value.clone();
        match child.standard_tag() {
            Some(Tag::Adr1) | Some(Tag::Adr2) | Some(Tag::Adr3) => {
                address.address_lines.push(value);
            }
            Some(Tag::City) => address.city = Some(value),
            Some(Tag::Stae) => address.state = Some(value),
            Some(Tag::Post) => address.postal_code = Some(value),
            Some(Tag::Ctry) => address.country = Some(value),
            Some(Tag::Phon) => address.phone = Some(value),
            Some(Tag::Email) => address.email = Some(value),
            Some(Tag::Fax) => address.fax = Some(value),
            Some(Tag::Www) => address.web = Some(value),
            _ => {}
        }
    }

    address
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::session::ParseSession;
    use crate::parser::tree::parse_raw_lines;
    use pretty_assertions::assert_eq;

    fn parse_subtree(source: &[&str]) -> Address {
        let lines: Vec<String> = source.iter().map(|s| s.to_string()).collect();
        let mut session = ParseSession::new();
        let forest = parse_raw_lines(&lines, &mut session).unwrap();
        parse_address(&forest[0])
    }

    #[test]
    fn test_full_address() {
        let address = parse_subtree(&[
            "2 ADDR 12 Main Street",
            "3 ADR1 Apt 4",
            "3 CITY Ottawa",
            "3 STAE Ontario",
            "3 POST K1A0A9",
            "3 CTRY Canada",
        ]);

        assert_eq!(address.address_lines, vec!["12 Main Street", "Apt 4"]);
        assert_eq!(address.city.as_deref(), Some("Ottawa"));
        assert_eq!(address.state.as_deref(), Some("Ontario"));
        assert_eq!(address.postal_code.as_deref(), Some("K1A0A9"));
        assert_eq!(address.country.as_deref(), Some("Canada"));
    }

    #[test]
    fn test_contact_details() {
        let address = parse_subtree(&[
            "2 ADDR",
            "3 PHON 555-1234",
            "3 EMAIL j@example.com",
            "3 WWW example.com",
        ]);

        assert_eq!(address.phone.as_deref(), Some("555-1234"));
        assert_eq!(address.email.as_deref(), Some("j@example.com"));
        assert_eq!(address.web.as_deref(), Some("example.com"));
        assert!(address.address_lines.is_empty());
    }
}
