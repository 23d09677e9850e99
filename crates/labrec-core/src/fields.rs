//! Field normalization heuristics
//!
//! All the candidate-based helpers share the same policy: the first
//! non-empty candidate that satisfies the field's shape wins, the
//! others are ignored. Unparsable candidates are skipped, not errors;
//! an error is only raised when a mandatory field is exhausted.

use chrono::NaiveDate;
use labrec_domain::language::PublicationLanguage;
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ExchangeError;

lazy_static! {
    static ref PAGE_RANGE: Regex = Regex::new(r"^\s*([0-9]+)\s*-\s*([0-9]+)\s*$").unwrap();
    static ref PURE_DIGITS: Regex = Regex::new(r"^[0-9]+$").unwrap();
    static ref NON_ALNUM: Regex = Regex::new(r"[^0-9a-zA-Z]+").unwrap();
    static ref KEYWORD_SEPARATOR: Regex = Regex::new(r"\s*[,;:./]\s*").unwrap();
    static ref DOI_NUMBER: Regex = Regex::new(r"(10\.[0-9]+(?:\.[0-9]+)*/[^\s]+)").unwrap();
}

/// First non-empty candidate, trimmed.
pub fn first_non_empty<'a, I>(candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|v| !v.is_empty())
}

/// First non-empty candidate, or [`ExchangeError::MissingRequiredField`].
pub fn required_field<'a, I>(
    field: &'static str,
    reference_id: &str,
    candidates: I,
) -> Result<&'a str, ExchangeError>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    first_non_empty(candidates).ok_or_else(|| ExchangeError::MissingRequiredField {
        field,
        reference_id: reference_id.to_string(),
    })
}

/// Parse a "start-end" page range, or a single page number. A reversed
/// range is reordered to ascending.
pub fn parse_page_range(value: &str) -> Option<(u32, u32)> {
    if let Some(captures) = PAGE_RANGE.captures(value) {
        let a: u32 = captures[1].parse().ok()?;
        let b: u32 = captures[2].parse().ok()?;
        return Some((a.min(b), a.max(b)));
    }
    let single: u32 = value.trim().parse().ok()?;
    Some((single, single))
}

/// Format a page range from separate start/end values. Values that do
/// not parse or are lower than 2 are treated as absent; when both are
/// present the range is emitted ascending.
pub fn format_pages(start: Option<&str>, end: Option<&str>) -> Option<String> {
    let parse = |v: Option<&str>| -> u32 {
        v.map(str::trim)
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(0)
    };
    let spage = parse(start);
    let epage = parse(end);
    if spage > 1 && epage > 1 {
        if spage <= epage {
            return Some(format!("{}-{}", spage, epage));
        }
        return Some(format!("{}-{}", epage, spage));
    }
    if spage > 1 {
        return Some(spage.to_string());
    }
    if epage > 1 {
        return Some(epage.to_string());
    }
    None
}

/// First candidate whose alphanumeric form is at least 10 characters
/// long, taken as an ISBN.
pub fn classify_isbn<'a, I>(candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .flatten()
        .find(|v| NON_ALNUM.replace_all(v, "").len() >= 10)
}

/// First candidate whose alphanumeric form is exactly 8 characters
/// long, taken as an ISSN.
pub fn classify_issn<'a, I>(candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .flatten()
        .find(|v| NON_ALNUM.replace_all(v, "").len() == 8)
}

/// First pure-digit candidate parsed as a year. The year is mandatory
/// in every exchange record.
pub fn parse_year<'a, I>(reference_id: &str, candidates: I) -> Result<i32, ExchangeError>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    for candidate in candidates.into_iter().flatten() {
        let candidate = candidate.trim();
        if PURE_DIGITS.is_match(candidate) {
            if let Ok(year) = candidate.parse::<i32>() {
                return Ok(year);
            }
        }
    }
    Err(ExchangeError::MissingRequiredField {
        field: "year",
        reference_id: reference_id.to_string(),
    })
}

/// First candidate parseable as an ISO calendar date; `None` when all
/// candidates are exhausted.
pub fn parse_date<'a, I>(candidates: I) -> Option<NaiveDate>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .flatten()
        .find_map(|v| NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d").ok())
}

/// First candidate matching a known language code, the default
/// language otherwise.
pub fn resolve_language<'a, I>(candidates: I) -> PublicationLanguage
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .flatten()
        .find_map(PublicationLanguage::from_code)
        .unwrap_or_default()
}

/// Split a keyword string on the accepted separators. Joining is done
/// with [`join_keywords`] and always emits "; ", so the original
/// separators are not preserved across a split/join round trip.
pub fn split_keywords(value: &str) -> Vec<String> {
    KEYWORD_SEPARATOR
        .split(value)
        .map(str::trim)
        .filter(|kw| !kw.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join a keyword list into the storage form.
pub fn join_keywords<I, S>(keywords: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = keywords
        .into_iter()
        .map(|kw| kw.as_ref().trim().to_string())
        .filter(|kw| !kw.is_empty())
        .collect::<Vec<_>>()
        .join("; ");
    if joined.is_empty() {
        None
    } else {
        Some(joined)
    }
}

/// Extract a DOI number from a candidate that may be a bare DOI or a
/// DOI URL. Candidates without a DOI number are skipped.
pub fn extract_doi<'a, I>(candidates: I) -> Option<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .flatten()
        .find_map(|v| DOI_NUMBER.captures(v).map(|c| c[1].to_string()))
}
