//! Date values decoded from the GEDCOM date mini-language.
//!
//! A date is a calendar plus a kind; the populated fields are exactly
//! those the kind implies. The constructors are the only way the parser
//! builds dates, which keeps that invariant in one place.

use serde::Serialize;

/// The calendar a date is expressed in.
///
/// Only Gregorian dates are decoded into structured fields; the other
/// calendars are recognized and recorded, with their text preserved as a
/// phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Calendar {
    Gregorian,
    Julian,
    Hebrew,
    French,
    Roman,
    Unknown,
}

impl Calendar {
    /// Match a calendar escape marker. The leading `#D` of the standard
    /// escape form (`@#DGREGORIAN@`) is tolerated and stripped.
    pub fn from_marker(marker: &str) -> Option<Calendar> {
        let name = marker.strip_prefix("#D").unwrap_or(marker);
        match name.trim() {
            "GREGORIAN" => Some(Calendar::Gregorian),
            "JULIAN" => Some(Calendar::Julian),
            "HEBREW" => Some(Calendar::Hebrew),
            "FRENCH R" => Some(Calendar::French),
            "ROMAN" => Some(Calendar::Roman),
            "UNKNOWN" => Some(Calendar::Unknown),
            _ => None,
        }
    }
}

/// The five mutually exclusive date kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DateKind {
    Regular,
    Period,
    Range,
    Approximated,
    Phrase,
}

/// How an approximated date qualifies its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Approximation {
    About,
    Calculated,
    Estimated,
}

/// A month of the Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// Match a GEDCOM month token (`JAN`..`DEC`).
    pub fn from_token(token: &str) -> Option<Month> {
        let month = match token {
            "JAN" => Month::January,
            "FEB" => Month::February,
            "MAR" => Month::March,
            "APR" => Month::April,
            "MAY" => Month::May,
            "JUN" => Month::June,
            "JUL" => Month::July,
            "AUG" => Month::August,
            "SEP" => Month::September,
            "OCT" => Month::October,
            "NOV" => Month::November,
            "DEC" => Month::December,
            _ => return None,
        };
        Some(month)
    }
}

/// The structured fields of one decoded calendar date. Used both for the
/// main fields of a regular date and for the sub-dates of periods and
/// ranges.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatePart {
    pub day: Option<u32>,
    pub month: Option<Month>,
    pub year: Option<i32>,
    pub julian_alternate_year: Option<i32>,
    #[serde(rename = "isBC")]
    pub is_bc: bool,
}

/// The start and end of a `BET ... AND ...` range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DateSpan {
    pub start: DatePart,
    pub end: DatePart,
}

/// A fully decoded date value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Date {
    pub calendar: Calendar,
    pub kind: DateKind,
    pub approximation: Option<Approximation>,
    pub day: Option<u32>,
    pub month: Option<Month>,
    pub year: Option<i32>,
    pub julian_alternate_year: Option<i32>,
    #[serde(rename = "isBC")]
    pub is_bc: bool,
    pub phrase: Option<String>,
    pub from: Option<DatePart>,
    pub to: Option<DatePart>,
    pub before: Option<DatePart>,
    pub after: Option<DatePart>,
    pub between: Option<DateSpan>,
}

impl Date {
    fn empty(calendar: Calendar, kind: DateKind) -> Self {
        Self {
            calendar,
            kind,
            approximation: None,
            day: None,
            month: None,
            year: None,
            julian_alternate_year: None,
            is_bc: false,
            phrase: None,
            from: None,
            to: None,
            before: None,
            after: None,
            between: None,
        }
    }

    /// A regular date, optionally with an inline `INT` phrase.
    pub fn regular(calendar: Calendar, part: DatePart, phrase: Option<String>) -> Self {
        let mut date = Self::empty(calendar, DateKind::Regular);
        date.day = part.day;
        date.month = part.month;
        date.year = part.year;
        date.julian_alternate_year = part.julian_alternate_year;
        date.is_bc = part.is_bc;
        date.phrase = phrase;
        date
    }

    /// An approximated (`ABT`/`CAL`/`EST`) date.
    pub fn approximated(calendar: Calendar, approximation: Approximation, part: DatePart) -> Self {
        let mut date = Self::regular(calendar, part, None);
        date.kind = DateKind::Approximated;
        date.approximation = Some(approximation);
        date
    }

    /// A `FROM`/`TO` period. At least one side is present.
    pub fn period(calendar: Calendar, from: Option<DatePart>, to: Option<DatePart>) -> Self {
        let mut date = Self::empty(calendar, DateKind::Period);
        date.from = from;
        date.to = to;
        date
    }

    /// A `BEF` range.
    pub fn before(calendar: Calendar, part: DatePart) -> Self {
        let mut date = Self::empty(calendar, DateKind::Range);
        date.before = Some(part);
        date
    }

    /// An `AFT` range.
    pub fn after(calendar: Calendar, part: DatePart) -> Self {
        let mut date = Self::empty(calendar, DateKind::Range);
        date.after = Some(part);
        date
    }

    /// A `BET ... AND ...` range.
    pub fn between(calendar: Calendar, start: DatePart, end: DatePart) -> Self {
        let mut date = Self::empty(calendar, DateKind::Range);
        date.between = Some(DateSpan { start, end });
        date
    }

    /// An unstructured date phrase. Also the downgrade target when
    /// decoding fails and the original text must be preserved.
    pub fn phrase(calendar: Calendar, text: impl Into<String>) -> Self {
        let mut date = Self::empty(calendar, DateKind::Phrase);
        date.phrase = Some(text.into());
        date
    }
}
