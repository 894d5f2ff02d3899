//! Personal name structures.

use serde::Serialize;

/// The kind of a personal name, from the `TYPE` substructure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NameType {
    Main,
    Aka,
    Birth,
    Immigrant,
    Maiden,
    Married,
}

impl NameType {
    pub fn from_value(value: &str) -> Option<NameType> {
        let kind = match value {
            "main" => NameType::Main,
            "aka" => NameType::Aka,
            "birth" => NameType::Birth,
            "immigrant" => NameType::Immigrant,
            "maiden" => NameType::Maiden,
            "married" => NameType::Married,
            _ => return None,
        };
        Some(kind)
    }
}

/// The six structured pieces a name can carry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamePieces {
    pub surname: Option<String>,
    pub prefix: Option<String>,
    pub given: Option<String>,
    pub nickname: Option<String>,
    pub surname_prefix: Option<String>,
    pub suffix: Option<String>,
}

impl NamePieces {
    pub fn is_empty(&self) -> bool {
        self.surname.is_none()
            && self.prefix.is_none()
            && self.given.is_none()
            && self.nickname.is_none()
            && self.surname_prefix.is_none()
            && self.suffix.is_none()
    }
}

/// A phonetic or romanized rendition of a name, with its own pieces.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameVariant {
    /// The variation method (e.g. "kana", "pinyin"), from `TYPE`.
    pub kind: Option<String>,
    pub value: String,
    pub pieces: NamePieces,
}

/// A personal name: the primary value plus structured pieces and
/// optional phonetic/romanized variants.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Name {
    pub kind: Option<NameType>,
    /// Display form with surname slashes stripped.
    pub value: String,
    pub pieces: NamePieces,
    pub note: Option<String>,
    pub source_citation: Option<String>,
    pub phonetic: Option<NameVariant>,
    pub romanized: Option<NameVariant>,
}
