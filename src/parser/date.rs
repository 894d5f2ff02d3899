//! The date value grammar.
//!
//! Decodes the GEDCOM date mini-language into [`Date`] entities: an
//! optional calendar escape, then one of five kinds - a regular
//! calendar date, a FROM/TO period, a BEF/AFT/BET range, an ABT/CAL/EST
//! approximation, or a parenthesized free-text phrase.
//!
//! Two failure policies live side by side here. Structural damage
//! (a lone `@`, an unknown calendar, `BET` without `AND`, an unbalanced
//! parenthesis) is fatal. A token that merely fails its numeric or
//! month-membership check downgrades that one date to a phrase carrying
//! the original text, with a warning, and the parse continues.

use crate::error::{GedError, Result};
use crate::types::{Approximation, Calendar, Date, DatePart, Month};

use super::session::ParseSession;

/// Parse one date line value.
pub fn parse_date_value(value: &str, line: usize, session: &mut ParseSession) -> Result<Date> {
    let (calendar, rest) = strip_calendar(value, line)?;

    // Non-Gregorian decoding is out of scope: record the calendar and
    // keep the text as a phrase so nothing is silently dropped.
    if calendar != Calendar::Gregorian {
        session.warnings_mut().warn(
            "ged::date::unsupported-calendar",
            format!(
                "Date '{}' in line {} is not Gregorian and was kept as a phrase",
                rest, line
            ),
        );
        return Ok(Date::phrase(calendar, rest));
    }

    let tokens: Vec<&str> = rest.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Date::regular(calendar, DatePart::default(), None));
    }

    match tokens[0] {
        "FROM" | "TO" => parse_period(calendar, &tokens, rest, line, session),
        "BEF" | "AFT" | "BET" => parse_range(calendar, &tokens, rest, line, session),
        "ABT" | "CAL" | "EST" => parse_approximated(calendar, &tokens, rest, line, session),
        "INT" => parse_interpreted(calendar, &tokens, rest, line, session),
        token if token.starts_with('(') => parse_phrase(calendar, rest, line),
        _ => match decode_part(&tokens, line)? {
            Some(part) => Ok(Date::regular(calendar, part, None)),
            None => Ok(fallback(calendar, rest, line, session)),
        },
    }
}

/// Strip an optional leading `@...@` calendar escape. Returns the
/// calendar (Gregorian when absent) and the remaining text.
fn strip_calendar<'a>(value: &'a str, line: usize) -> Result<(Calendar, &'a str)> {
    let trimmed = value.trim();
    if !trimmed.starts_with('@') {
        return Ok((Calendar::Gregorian, trimmed));
    }

    let Some(close) = trimmed[1..].find('@') else {
        return Err(GedError::MalformedCalendar {
            value: trimmed.to_string(),
            line,
        });
    };

    let marker = &trimmed[1..1 + close];
    let calendar = Calendar::from_marker(marker).ok_or_else(|| GedError::UnknownCalendar {
        marker: marker.to_string(),
        line,
    })?;

    Ok((calendar, trimmed[close + 2..].trim_start()))
}

/// Downgrade an undecodable date to a phrase, with a warning.
fn fallback(calendar: Calendar, original: &str, line: usize, session: &mut ParseSession) -> Date {
    session.warnings_mut().warn(
        "ged::date::phrase-fallback",
        format!(
            "Could not decode date '{}' in line {}; kept as a phrase",
            original, line
        ),
    );
    Date::phrase(calendar, original)
}

fn parse_period(
    calendar: Calendar,
    tokens: &[&str],
    original: &str,
    line: usize,
    session: &mut ParseSession,
) -> Result<Date> {
    let (from_tokens, to_tokens): (&[&str], &[&str]) = if tokens[0] == "TO" {
        (&[], &tokens[1..])
    } else {
        match tokens.iter().position(|&t| t == "TO") {
            Some(to_pos) => (&tokens[1..to_pos], &tokens[to_pos + 1..]),
            None => (&tokens[1..], &[]),
        }
    };

    let from = match decode_optional(from_tokens, line)? {
        Decoded::Absent => None,
        Decoded::Part(part) => Some(part),
        Decoded::Failed => return Ok(fallback(calendar, original, line, session)),
    };
    let to = match decode_optional(to_tokens, line)? {
        Decoded::Absent => None,
        Decoded::Part(part) => Some(part),
        Decoded::Failed => return Ok(fallback(calendar, original, line, session)),
    };

    Ok(Date::period(calendar, from, to))
}

fn parse_range(
    calendar: Calendar,
    tokens: &[&str],
    original: &str,
    line: usize,
    session: &mut ParseSession,
) -> Result<Date> {
    match tokens[0] {
        "BEF" => match decode_part(&tokens[1..], line)? {
            Some(part) => Ok(Date::before(calendar, part)),
            None => Ok(fallback(calendar, original, line, session)),
        },
        "AFT" => match decode_part(&tokens[1..], line)? {
            Some(part) => Ok(Date::after(calendar, part)),
            None => Ok(fallback(calendar, original, line, session)),
        },
        _ => {
            // BET requires a matching AND somewhere in the value.
            let Some(and_pos) = tokens.iter().position(|&t| t == "AND") else {
                return Err(GedError::IncompleteRange {
                    value: original.to_string(),
                    line,
                });
            };
            let start = decode_part(&tokens[1..and_pos], line)?;
            let end = decode_part(&tokens[and_pos + 1..], line)?;
            match (start, end) {
                (Some(start), Some(end)) => Ok(Date::between(calendar, start, end)),
                _ => Ok(fallback(calendar, original, line, session)),
            }
        }
    }
}

fn parse_approximated(
    calendar: Calendar,
    tokens: &[&str],
    original: &str,
    line: usize,
    session: &mut ParseSession,
) -> Result<Date> {
    let approximation = match tokens[0] {
        "ABT" => Approximation::About,
        "CAL" => Approximation::Calculated,
        _ => Approximation::Estimated,
    };

    match decode_part(&tokens[1..], line)? {
        Some(part) => Ok(Date::approximated(calendar, approximation, part)),
        None => Ok(fallback(calendar, original, line, session)),
    }
}

/// `INT <date> (<phrase>)`: a regular date carrying the transcriber's
/// interpretation text.
fn parse_interpreted(
    calendar: Calendar,
    tokens: &[&str],
    original: &str,
    line: usize,
    session: &mut ParseSession,
) -> Result<Date> {
    let rest = &tokens[1..];
    let paren_pos = rest.iter().position(|t| t.starts_with('('));

    let (date_tokens, phrase) = match paren_pos {
        Some(pos) => {
            let text = rest[pos..].join(" ");
            if !text.ends_with(')') {
                return Err(GedError::UnbalancedDatePhrase {
                    value: original.to_string(),
                    line,
                });
            }
            let inner = text[1..text.len() - 1].trim().to_string();
            (&rest[..pos], Some(inner))
        }
        None => (rest, None),
    };

    match decode_part(date_tokens, line)? {
        Some(part) => Ok(Date::regular(calendar, part, phrase)),
        None => Ok(fallback(calendar, original, line, session)),
    }
}

/// A parenthesized date phrase: `(before the harvest)`.
fn parse_phrase(calendar: Calendar, original: &str, line: usize) -> Result<Date> {
    if !original.ends_with(')') {
        return Err(GedError::UnbalancedDatePhrase {
            value: original.to_string(),
            line,
        });
    }
    let inner = original[1..original.len() - 1].trim();
    Ok(Date::phrase(calendar, inner))
}

/// The three outcomes of decoding an optional sub-date.
enum Decoded {
    Absent,
    Part(DatePart),
    Failed,
}

fn decode_optional(tokens: &[&str], line: usize) -> Result<Decoded> {
    if tokens.is_empty() {
        return Ok(Decoded::Absent);
    }
    Ok(match decode_part(tokens, line)? {
        Some(part) => Decoded::Part(part),
        None => Decoded::Failed,
    })
}

/// Arity-based decoding of a Gregorian calendar date. `Ok(None)` means
/// the tokens failed a numeric or month-membership check and the caller
/// should fall back to a phrase.
fn decode_part(tokens: &[&str], line: usize) -> Result<Option<DatePart>> {
    match tokens {
        [] => Ok(None),
        [year] => parse_year_token(year, line),
        [year, suffix] if is_bc_suffix(suffix) => {
            Ok(parse_year_token(year, line)?.map(|part| DatePart {
                is_bc: true,
                ..part
            }))
        }
        [month, year] => {
            let Some(month) = Month::from_token(month) else {
                return Ok(None);
            };
            Ok(parse_year_token(year, line)?.map(|part| DatePart {
                month: Some(month),
                ..part
            }))
        }
        [day, month, year] => {
            let Ok(day) = day.parse::<u32>() else {
                return Ok(None);
            };
            let Some(month) = Month::from_token(month) else {
                return Ok(None);
            };
            Ok(parse_year_token(year, line)?.map(|part| DatePart {
                day: Some(day),
                month: Some(month),
                ..part
            }))
        }
        _ => Ok(None),
    }
}

fn is_bc_suffix(token: &str) -> bool {
    token == "B.C." || token == "BC"
}

/// Decode a year token: digits, optionally a single `/`-separated
/// Julian alternate year, optionally a trailing BC marker. More than
/// one `/` is fatal; anything non-numeric is a soft failure.
fn parse_year_token(token: &str, line: usize) -> Result<Option<DatePart>> {
    let mut text = token;
    let mut is_bc = false;
    for suffix in ["B.C.", "BC"] {
        if let Some(stripped) = text.strip_suffix(suffix) {
            text = stripped;
            is_bc = true;
            break;
        }
    }

    let slashes = text.matches('/').count();
    if slashes > 1 {
        return Err(GedError::Parse {
            message: format!("Too many '/' in date year '{}' in line {}", token, line),
            help: Some("A dual year looks like 1750/51".to_string()),
        });
    }

    let (year_text, alternate_text) = match text.split_once('/') {
        Some((year, alternate)) => (year, Some(alternate)),
        None => (text, None),
    };

    let Some(year) = parse_year_number(year_text) else {
        return Ok(None);
    };
    let julian_alternate_year = match alternate_text {
        Some(alternate) => match parse_year_number(alternate) {
            Some(value) => Some(value),
            None => return Ok(None),
        },
        None => None,
    };

    Ok(Some(DatePart {
        day: None,
        month: None,
        year: Some(year),
        julian_alternate_year,
        is_bc,
    }))
}

fn parse_year_number(text: &str) -> Option<i32> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    text.parse::<i32>().ok()
}
