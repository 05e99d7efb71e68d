//! Text-level parsing of the values published in the lake tables.
//!
//! Dates and levels fail differently on purpose: a date anchors where a value
//! goes, so [`parse_date`] returns an error, while a level that cannot be read
//! degrades to `0.0` through [`parse_level`].

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;

/// Day.month.year, day and month not necessarily zero-padded.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Shape accepted before handing the text to chrono, whose `%Y` also takes
/// short or signed years.
const DATE_PATTERN: &str = r"^[0-9]{1,2}\.[0-9]{1,2}\.[0-9]{4}$";

/// "msm" is "mètres sur mer", metres above sea level.
const LEVEL_PATTERN: &str = r"([0-9]+\.[0-9]+).*msm";

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DATE_PATTERN).expect("date pattern is valid"));
static LEVEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LEVEL_PATTERN).expect("level pattern is valid"));

const NAME_MARKERS: &[char] = &['*'];

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid date {text:?}: {message}")]
pub struct DateParseError {
    pub text: String,
    pub message: String,
}

/// The first decimal number followed by `msm`, or `None`.
pub fn try_parse_level(text: &str) -> Option<f64> {
    let captures = LEVEL_RE.captures(text)?;
    captures
        .get(1)?
        .as_str()
        .parse()
        .ok()
        .filter(|value: &f64| value.is_finite())
}

/// Like [`try_parse_level`], with `0.0` standing in for "no reading".
pub fn parse_level(text: &str) -> f64 {
    try_parse_level(text).unwrap_or(0.0)
}

pub fn parse_date(text: &str) -> Result<NaiveDate, DateParseError> {
    let trimmed = text.trim();
    if !DATE_RE.is_match(trimmed) {
        return Err(DateParseError {
            text: trimmed.to_string(),
            message: "expected day.month.year".to_string(),
        });
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|err| DateParseError {
        text: trimmed.to_string(),
        message: err.to_string(),
    })
}

/// Strip footnote markers such as a trailing `*` from a lake name.
pub fn clean_lake_name(text: &str) -> String {
    text.replace(NAME_MARKERS, "").trim().to_string()
}
