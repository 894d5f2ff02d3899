//! Personal name parsing.
//!
//! The name line carries the display form with the surname quoted in
//! slashes, possibly spanning several tokens: `John /Van Buren/ Jr`.
//! The slashes are stripped for the primary value and the quoted span
//! doubles as the surname piece unless an explicit `SURN` child
//! overrides it. Unknown piece tags are silently skipped.

use crate::error::{GedError, Result};
use crate::types::{Name, NamePieces, NameType, NameVariant};

use super::tag::Tag;
use super::types::Record;

/// Parse a `NAME` record subtree.
pub fn parse_name(record: &Record) -> Result<Name> {
    let (value, quoted_surname) = join_name_value(&record.line_value, record.line)?;
    if value.is_empty() {
        return Err(GedError::Parse {
            message: format!("Empty personal name in line {}", record.line),
            help: Some("A NAME line needs a value, e.g. NAME John /Smith/".to_string()),
        });
    }

    let mut name = Name {
        value,
        ..Name::default()
    };
    name.pieces = parse_pieces(record);
    if name.pieces.surname.is_none() {
        name.pieces.surname = quoted_surname;
    }

    for child in record.semantic_children() {
        match child.standard_tag() {
            Some(Tag::Type) => {
                let Some(kind) = NameType::from_value(&child.line_value) else {
                    return Err(GedError::Parse {
                        message: format!(
                            "Invalid name type '{}' in line {}",
                            child.line_value, child.line
                        ),
                        help: None,
                    });
                };
                name.kind = Some(kind);
            }
            Some(Tag::Fone) => {
                name.phonetic = Some(parse_variant(child));
            }
            Some(Tag::Romn) => {
                name.romanized = Some(parse_variant(child));
            }
            Some(Tag::Note) => {
                name.note = Some(super::resolved_text(child));
            }
            Some(Tag::Sour) => {
                name.source_citation = Some(pointer_or_value(child));
            }
            _ => {}
        }
    }

    Ok(name)
}

/// Parse a `FONE` or `ROMN` variation subtree.
fn parse_variant(record: &Record) -> NameVariant {
    let mut variant = NameVariant {
        value: record.line_value.clone(),
        ..NameVariant::default()
    };
    variant.pieces = parse_pieces(record);

    if let Some(kind) = record.child(Tag::Type) {
        if !kind.line_value.is_empty() {
            variant.kind = Some(kind.line_value.clone());
        }
    }

    variant
}

/// Collect the six structured pieces from a record's children.
fn parse_pieces(record: &Record) -> NamePieces {
    let mut pieces = NamePieces::default();
    for child in record.semantic_children() {
        let value = child.line_value.clone();
        match child.standard_tag() {
            Some(Tag::Npfx) => pieces.prefix = Some(value),
            Some(Tag::Givn) => pieces.given = Some(value),
            Some(Tag::Nick) => pieces.nickname = Some(value),
            Some(Tag::Spfx) => pieces.surname_prefix = Some(value),
            Some(Tag::Surn) => pieces.surname = Some(value),
            Some(Tag::Nsfx) => pieces.suffix = Some(value),
            _ => {}
        }
    }
    pieces
}

/// Join the name line's tokens, reconstructing slash-quoted surname
/// spans. Returns the display value and the first quoted surname, if
/// any. An unterminated span is fatal.
fn join_name_value(line_value: &str, line: usize) -> Result<(String, Option<String>)> {
    let mut parts: Vec<String> = Vec::new();
    let mut surname: Option<String> = None;
    let mut span_tokens: Vec<String> = Vec::new();
    let mut in_span = false;

    for token in line_value.split_whitespace() {
        if !in_span && token.len() > 1 && token.starts_with('/') && token.ends_with('/') {
            // Single-token quoted surname: /Smith/
            let part = token[1..token.len() - 1].to_string();
            if surname.is_none() {
                surname = Some(part.clone());
            }
            parts.push(part);
        } else if !in_span && token.starts_with('/') {
            in_span = true;
            span_tokens.push(token[1..].to_string());
        } else if in_span && token.ends_with('/') {
            in_span = false;
            span_tokens.push(token[..token.len() - 1].to_string());
            let part = span_tokens.join(" ");
            span_tokens.clear();
            if surname.is_none() {
                surname = Some(part.clone());
            }
            parts.push(part);
        } else if in_span {
            span_tokens.push(token.to_string());
        } else {
            parts.push(token.to_string());
        }
    }

    if in_span {
        return Err(GedError::UnterminatedSurname {
            value: line_value.to_string(),
            line,
        });
    }

    Ok((parts.join(" "), surname))
}

/// A citation child carries either a pointer or inline text.
pub(super) fn pointer_or_value(record: &Record) -> String {
    match &record.cross_ref_ptr {
        Some(ptr) => ptr.clone(),
        None => record.line_value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tree::parse_raw_lines;
    use pretty_assertions::assert_eq;

    fn parse_subtree(source: &[&str]) -> Result<Name> {
        let lines: Vec<String> = source.iter().map(|s| s.to_string()).collect();
        let mut session = crate::parser::session::ParseSession::new();
        let forest = parse_raw_lines(&lines, &mut session).unwrap();
        parse_name(&forest[0])
    }

    fn parse_ok(source: &[&str]) -> Name {
        parse_subtree(source).unwrap()
    }

    #[test]
    fn test_simple_name() {
        let name = parse_ok(&["1 NAME John /Smith/"]);
        assert_eq!(name.value, "John Smith");
        assert_eq!(name.pieces.surname.as_deref(), Some("Smith"));
    }

    #[test]
    fn test_multi_word_surname() {
        let name = parse_ok(&["1 NAME Martin /Van Buren/"]);
        assert_eq!(name.value, "Martin Van Buren");
        assert_eq!(name.pieces.surname.as_deref(), Some("Van Buren"));
    }

    #[test]
    fn test_surname_then_suffix() {
        let name = parse_ok(&["1 NAME John /Smith/ Jr"]);
        assert_eq!(name.value, "John Smith Jr");
        assert_eq!(name.pieces.surname.as_deref(), Some("Smith"));
    }

    #[test]
    fn test_explicit_surn_overrides_span() {
        let name = parse_ok(&["1 NAME John /Smith/", "2 SURN Smythe"]);
        assert_eq!(name.pieces.surname.as_deref(), Some("Smythe"));
    }

    #[test]
    fn test_pieces() {
        let name = parse_ok(&[
            "1 NAME Dr John /Smith/",
            "2 NPFX Dr",
            "2 GIVN John",
            "2 NICK Jack",
            "2 SPFX van",
            "2 NSFX Jr",
        ]);
        assert_eq!(name.pieces.prefix.as_deref(), Some("Dr"));
        assert_eq!(name.pieces.given.as_deref(), Some("John"));
        assert_eq!(name.pieces.nickname.as_deref(), Some("Jack"));
        assert_eq!(name.pieces.surname_prefix.as_deref(), Some("van"));
        assert_eq!(name.pieces.suffix.as_deref(), Some("Jr"));
        assert_eq!(name.pieces.surname.as_deref(), Some("Smith"));
    }

    #[test]
    fn test_unterminated_surname_is_fatal() {
        let result = parse_subtree(&["1 NAME John /Smith"]);
        assert!(matches!(
            result,
            Err(GedError::UnterminatedSurname { .. })
        ));
    }

    #[test]
    fn test_empty_name_is_fatal() {
        let result = parse_subtree(&["1 NAME"]);
        assert!(matches!(result, Err(GedError::Parse { .. })));
    }

    #[test]
    fn test_name_type() {
        let name = parse_ok(&["1 NAME Jane /Doe/", "2 TYPE maiden"]);
        assert_eq!(name.kind, Some(NameType::Maiden));
    }

    #[test]
    fn test_invalid_name_type_is_fatal() {
        let result = parse_subtree(&["1 NAME Jane /Doe/", "2 TYPE bogus"]);
        assert!(matches!(result, Err(GedError::Parse { .. })));
    }

    #[test]
    fn test_phonetic_and_romanized_variants() {
        let name = parse_ok(&[
            "1 NAME Taro /Yamada/",
            "2 FONE Yamada Taro",
            "3 TYPE kana",
            "3 SURN Yamada",
            "2 ROMN Yamada Taro",
            "3 TYPE romaji",
        ]);

        let phonetic = name.phonetic.unwrap();
        assert_eq!(phonetic.value, "Yamada Taro");
        assert_eq!(phonetic.kind.as_deref(), Some("kana"));
        assert_eq!(phonetic.pieces.surname.as_deref(), Some("Yamada"));

        let romanized = name.romanized.unwrap();
        assert_eq!(romanized.kind.as_deref(), Some("romaji"));
    }

    #[test]
    fn test_unknown_piece_tags_skipped() {
        // RIN is a valid tag but not a name piece; it must not fail.
        let name = parse_ok(&["1 NAME John /Smith/", "2 RIN 4"]);
        assert_eq!(name.value, "John Smith");
    }
}
