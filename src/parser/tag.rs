//! Token classification for GEDCOM lines.
//!
//! Pure, total functions answering the four questions the tokenizer asks
//! of a token: is it a valid level, does it have cross-reference syntax,
//! is it a valid cross-reference id, and is it a known tag. The standard
//! tag set is a closed enum so tag dispatch in the structure parsers is
//! exhaustive matching rather than string comparison.

use std::fmt;

/// A standard GEDCOM 5.5.5 structural tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Gedc,
    Head,
    Trlr,
    Vers,
    Dest,
    Sour,
    Corp,
    Data,
    Date,
    Comm,
    Copr,
    Time,
    Lang,
    Subm,
    Subn,
    File,
    Note,
    Fam,
    Husb,
    Wife,
    Marr,
    Chil,
    Nchi,
    Refn,
    Resn,
    Type,
    Fone,
    Rin,
    Indi,
    Sex,
    Obje,
    Titl,
    Repo,
    Plac,
    Agnc,
    Auth,
    Abbr,
    Text,
    Addr,
    Adr1,
    Adr2,
    Adr3,
    City,
    Stae,
    Post,
    Coun,
    Phon,
    Email,
    Fax,
    Www,
    Assoc,
    Rela,
    Chan,
    Famc,
    Pedi,
    Caus,
    Age,
    Anul,
    Cens,
    Div,
    Divf,
    Enga,
    Marb,
    Marc,
    Marl,
    Mars,
    Resi,
    Even,
    Cast,
    Desc,
    Educ,
    Idno,
    Nati,
    Name,
    Reln,
    Occu,
    Poss,
    Reli,
    Fact,
    Birt,
    Chr,
    Deat,
    Buri,
    Crem,
    Adop,
    Bapm,
    Barm,
    Basm,
    Chra,
    Conf,
    Cont,
    Fcom,
    Natu,
    Emig,
    Immi,
    Prob,
    Will,
    Grad,
    Reti,
    Npfx,
    Givn,
    Nick,
    Spfx,
    Surn,
    Nsfx,
    Romn,
    Map,
    Lati,
    Long,
    Page,
    Role,
    Cert,
    Medi,
    Fams,
    Char,
    Form,
    Ctry,
    Conc,
    Publ,
    Alia,
}

impl Tag {
    /// Look up a standard tag by its source token.
    pub fn from_token(token: &str) -> Option<Tag> {
        let tag = match token {
            "GEDC" => Tag::Gedc,
            "HEAD" => Tag::Head,
            "TRLR" => Tag::Trlr,
            "VERS" => Tag::Vers,
            "DEST" => Tag::Dest,
            "SOUR" => Tag::Sour,
            "CORP" => Tag::Corp,
            "DATA" => Tag::Data,
            "DATE" => Tag::Date,
            "COMM" => Tag::Comm,
            "COPR" => Tag::Copr,
            "TIME" => Tag::Time,
            "LANG" => Tag::Lang,
            "SUBM" => Tag::Subm,
            "SUBN" => Tag::Subn,
            "FILE" => Tag::File,
            "NOTE" => Tag::Note,
            "FAM" => Tag::Fam,
            "HUSB" => Tag::Husb,
            "WIFE" => Tag::Wife,
            "MARR" => Tag::Marr,
            "CHIL" => Tag::Chil,
            "NCHI" => Tag::Nchi,
            "REFN" => Tag::Refn,
            "RESN" => Tag::Resn,
            "TYPE" => Tag::Type,
            "FONE" => Tag::Fone,
            "RIN" => Tag::Rin,
            "INDI" => Tag::Indi,
            "SEX" => Tag::Sex,
            "OBJE" => Tag::Obje,
            "TITL" => Tag::Titl,
            "REPO" => Tag::Repo,
            "PLAC" => Tag::Plac,
            "AGNC" => Tag::Agnc,
            "AUTH" => Tag::Auth,
            "ABBR" => Tag::Abbr,
            "TEXT" => Tag::Text,
            "ADDR" => Tag::Addr,
            "ADR1" => Tag::Adr1,
            "ADR2" => Tag::Adr2,
            "ADR3" => Tag::Adr3,
            "CITY" => Tag::City,
            "STAE" => Tag::Stae,
            "POST" => Tag::Post,
            "COUN" => Tag::Coun,
            "PHON" => Tag::Phon,
            "EMAIL" => Tag::Email,
            "FAX" => Tag::Fax,
            "WWW" => Tag::Www,
            "ASSOC" => Tag::Assoc,
            "RELA" => Tag::Rela,
            "CHAN" => Tag::Chan,
            "FAMC" => Tag::Famc,
            "PEDI" => Tag::Pedi,
            "CAUS" => Tag::Caus,
            "AGE" => Tag::Age,
            "ANUL" => Tag::Anul,
            "CENS" => Tag::Cens,
            "DIV" => Tag::Div,
            "DIVF" => Tag::Divf,
            "ENGA" => Tag::Enga,
            "MARB" => Tag::Marb,
            "MARC" => Tag::Marc,
            "MARL" => Tag::Marl,
            "MARS" => Tag::Mars,
            "RESI" => Tag::Resi,
            "EVEN" => Tag::Even,
            "CAST" => Tag::Cast,
            "DESC" => Tag::Desc,
            "EDUC" => Tag::Educ,
            "IDNO" => Tag::Idno,
            "NATI" => Tag::Nati,
            "NAME" => Tag::Name,
            "RELN" => Tag::Reln,
            "OCCU" => Tag::Occu,
            "POSS" => Tag::Poss,
            "RELI" => Tag::Reli,
            "FACT" => Tag::Fact,
            "BIRT" => Tag::Birt,
            "CHR" => Tag::Chr,
            "DEAT" => Tag::Deat,
            "BURI" => Tag::Buri,
            "CREM" => Tag::Crem,
            "ADOP" => Tag::Adop,
            "BAPM" => Tag::Bapm,
            "BARM" => Tag::Barm,
            "BASM" => Tag::Basm,
            "CHRA" => Tag::Chra,
            "CONF" => Tag::Conf,
            "CONT" => Tag::Cont,
            "FCOM" => Tag::Fcom,
            "NATU" => Tag::Natu,
            "EMIG" => Tag::Emig,
            "IMMI" => Tag::Immi,
            "PROB" => Tag::Prob,
            "WILL" => Tag::Will,
            "GRAD" => Tag::Grad,
            "RETI" => Tag::Reti,
            "NPFX" => Tag::Npfx,
            "GIVN" => Tag::Givn,
            "NICK" => Tag::Nick,
            "SPFX" => Tag::Spfx,
            "SURN" => Tag::Surn,
            "NSFX" => Tag::Nsfx,
            "ROMN" => Tag::Romn,
            "MAP" => Tag::Map,
            "LATI" => Tag::Lati,
            "LONG" => Tag::Long,
            "PAGE" => Tag::Page,
            "ROLE" => Tag::Role,
            "CERT" => Tag::Cert,
            "MEDI" => Tag::Medi,
            "FAMS" => Tag::Fams,
            "CHAR" => Tag::Char,
            "FORM" => Tag::Form,
            "CTRY" => Tag::Ctry,
            "CONC" => Tag::Conc,
            "PUBL" => Tag::Publ,
            "ALIA" => Tag::Alia,
            _ => return None,
        };
        Some(tag)
    }

    /// The display name for an individual event tag, or `None` when this
    /// tag is not an individual event. `EVEN` maps to an empty name - the
    /// caller fills it from the line value or a TYPE child.
    pub fn individual_event_name(&self) -> Option<&'static str> {
        let name = match self {
            Tag::Birt => "Birth",
            Tag::Deat => "Death",
            Tag::Buri => "Burial",
            Tag::Crem => "Cremation",
            Tag::Natu => "Naturalization",
            Tag::Emig => "Emigration",
            Tag::Immi => "Immigration",
            Tag::Adop => "Adoption",
            Tag::Bapm => "Baptism",
            Tag::Barm => "Bar Mitzvah",
            Tag::Basm => "Bas Mitzvah",
            Tag::Chra => "Christening",
            Tag::Conf => "Confirmation",
            Tag::Fcom => "First Communion",
            Tag::Cens => "Census",
            Tag::Prob => "Probate",
            Tag::Will => "Will",
            Tag::Grad => "Graduation",
            Tag::Reti => "Retirement",
            Tag::Chr => "Adult Christening",
            Tag::Even => "",
            _ => return None,
        };
        Some(name)
    }

    /// The display name for a family event tag, or `None` when this tag
    /// is not a family event.
    pub fn family_event_name(&self) -> Option<&'static str> {
        let name = match self {
            Tag::Anul => "Annulment",
            Tag::Div => "Divorce",
            Tag::Divf => "Divorce Filed",
            Tag::Enga => "Engagement",
            Tag::Marb => "Marriage Banns",
            Tag::Marc => "Marriage Contract",
            Tag::Marl => "Marriage License",
            Tag::Mars => "Marriage Settlement",
            Tag::Marr => "Marriage",
            Tag::Cens => "Census",
            Tag::Resi => "Residence",
            Tag::Even => "",
            _ => return None,
        };
        Some(name)
    }

    /// The display name for an individual attribute tag, or `None` when
    /// this tag is not an attribute. `FACT` maps to an empty name.
    pub fn attribute_name(&self) -> Option<&'static str> {
        let name = match self {
            Tag::Cast => "Caste",
            Tag::Desc => "Physical Description",
            Tag::Educ => "Education",
            Tag::Idno => "National ID Number",
            Tag::Nati => "Nationality",
            Tag::Nchi => "Number of Children",
            Tag::Occu => "Occupation",
            Tag::Poss => "Property",
            Tag::Reli => "Religion",
            Tag::Resi => "Residence",
            Tag::Titl => "Title",
            Tag::Fact => "",
            _ => return None,
        };
        Some(name)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The source token is the canonical spelling.
        let token = format!("{:?}", self).to_uppercase();
        write!(f, "{}", token)
    }
}

/// A recognized but deprecated tag; tolerated with a warning and
/// excluded from semantic parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObsoleteTag {
    Ssn,
    Fsid,
}

impl ObsoleteTag {
    pub fn from_token(token: &str) -> Option<ObsoleteTag> {
        match token {
            "SSN" => Some(ObsoleteTag::Ssn),
            "FSID" => Some(ObsoleteTag::Fsid),
            _ => None,
        }
    }
}

impl fmt::Display for ObsoleteTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObsoleteTag::Ssn => write!(f, "SSN"),
            ObsoleteTag::Fsid => write!(f, "FSID"),
        }
    }
}

/// The classification of a line's tag token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagKind {
    Standard(Tag),
    Obsolete(ObsoleteTag),
    /// User extension: `_`-prefixed private tag, stored verbatim.
    User(String),
}

impl TagKind {
    /// The standard tag, when this is one.
    pub fn standard(&self) -> Option<Tag> {
        match self {
            TagKind::Standard(tag) => Some(*tag),
            _ => None,
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagKind::Standard(tag) => write!(f, "{}", tag),
            TagKind::Obsolete(tag) => write!(f, "{}", tag),
            TagKind::User(token) => write!(f, "{}", token),
        }
    }
}

/// Whether a token is a valid level: all digits, value 0..=99.
pub fn is_valid_level(token: &str) -> bool {
    !token.is_empty()
        && token.chars().all(|c| c.is_ascii_digit())
        && token.parse::<u32>().map_or(false, |level| level <= 99)
}

/// Whether a token has cross-reference syntax: longer than two
/// characters, starting and ending with `@`.
pub fn has_xref_syntax(token: &str) -> bool {
    token.len() > 2 && token.starts_with('@') && token.ends_with('@')
}

/// Whether a token is a valid cross-reference id: cross-reference syntax
/// with only alphanumeric interior characters and no inner `@`.
pub fn is_valid_xref_id(token: &str) -> bool {
    if token.len() <= 2 {
        return false;
    }
    token[1..token.len() - 1]
        .chars()
        .all(|c| c.is_alphanumeric() && c != '@')
}

/// Whether a token is a valid user-extension tag: exactly one leading
/// underscore and no further underscores. When `allow_redefined` is
/// false, a user tag whose body collides with a standard tag name is
/// rejected.
pub fn is_user_defined_tag(token: &str, allow_redefined: bool) -> bool {
    let Some(body) = token.strip_prefix('_') else {
        return false;
    };
    if body.is_empty() || body.contains('_') {
        return false;
    }
    if !allow_redefined && Tag::from_token(body).is_some() {
        return false;
    }
    true
}

/// Classify a tag token. Returns `None` for tokens that are neither
/// standard, obsolete, nor valid user extensions.
pub fn classify_tag(token: &str, allow_redefined: bool) -> Option<TagKind> {
    if let Some(obsolete) = ObsoleteTag::from_token(token) {
        return Some(TagKind::Obsolete(obsolete));
    }
    if let Some(tag) = Tag::from_token(token) {
        return Some(TagKind::Standard(tag));
    }
    if is_user_defined_tag(token, allow_redefined) {
        return Some(TagKind::User(token.to_string()));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_levels() {
        for token in ["0", "1", "9", "10", "99", "00"] {
            assert!(is_valid_level(token), "{} should be valid", token);
        }
    }

    #[test]
    fn test_invalid_levels() {
        for token in ["", "100", "-1", "1.5", "a", "1a", "999"] {
            assert!(!is_valid_level(token), "{} should be invalid", token);
        }
    }

    #[test]
    fn test_xref_syntax() {
        assert!(has_xref_syntax("@I1@"));
        assert!(has_xref_syntax("@SUBMITTER@"));
        assert!(!has_xref_syntax("@@"));
        assert!(!has_xref_syntax("@I1"));
        assert!(!has_xref_syntax("I1@"));
        assert!(!has_xref_syntax("I1"));
    }

    #[test]
    fn test_xref_validity() {
        assert!(is_valid_xref_id("@I1@"));
        assert!(is_valid_xref_id("@F99@"));
        assert!(!is_valid_xref_id("@I 1@"));
        assert!(!is_valid_xref_id("@I@1@"));
        assert!(!is_valid_xref_id("@a-b@"));
        assert!(!is_valid_xref_id("@@"));
    }

    #[test]
    fn test_standard_tag_round_trip() {
        for token in ["INDI", "FAM", "HEAD", "NAME", "DATE", "SURN", "ALIA"] {
            let tag = Tag::from_token(token).unwrap();
            assert_eq!(tag.to_string(), token);
        }
    }

    #[test]
    fn test_obsolete_not_standard() {
        // SSN and FSID are only reachable through the obsolete set.
        assert!(Tag::from_token("SSN").is_none());
        assert!(Tag::from_token("FSID").is_none());
        assert_eq!(ObsoleteTag::from_token("SSN"), Some(ObsoleteTag::Ssn));
        assert_eq!(ObsoleteTag::from_token("FSID"), Some(ObsoleteTag::Fsid));
    }

    #[test]
    fn test_user_defined_tags() {
        assert!(is_user_defined_tag("_UID", true));
        assert!(is_user_defined_tag("_MYTAG", true));
        assert!(!is_user_defined_tag("__UID", true));
        assert!(!is_user_defined_tag("_MY_TAG", true));
        assert!(!is_user_defined_tag("UID", true));
        assert!(!is_user_defined_tag("_", true));
    }

    #[test]
    fn test_user_defined_redefinition() {
        assert!(is_user_defined_tag("_NAME", true));
        assert!(!is_user_defined_tag("_NAME", false));
        // Non-colliding tags are fine either way.
        assert!(is_user_defined_tag("_UID", false));
    }

    #[test]
    fn test_classify_tag() {
        assert_eq!(
            classify_tag("INDI", true),
            Some(TagKind::Standard(Tag::Indi))
        );
        assert_eq!(
            classify_tag("SSN", true),
            Some(TagKind::Obsolete(ObsoleteTag::Ssn))
        );
        assert_eq!(
            classify_tag("_UID", true),
            Some(TagKind::User("_UID".to_string()))
        );
        assert_eq!(classify_tag("NOTATAG", true), None);
    }

    #[test]
    fn test_event_name_tables() {
        assert_eq!(Tag::Birt.individual_event_name(), Some("Birth"));
        assert_eq!(Tag::Even.individual_event_name(), Some(""));
        assert_eq!(Tag::Name.individual_event_name(), None);

        assert_eq!(Tag::Marr.family_event_name(), Some("Marriage"));
        assert_eq!(Tag::Birt.family_event_name(), None);

        assert_eq!(Tag::Occu.attribute_name(), Some("Occupation"));
        assert_eq!(Tag::Birt.attribute_name(), None);
    }
}
