//! Calendar month identifiers
//!
//! Snapshots are keyed externally by strings of the form
//! `"<MonthName> <Year>"` (e.g. `"March 2024"`). `MonthKey` is the parsed
//! form of such a key and orders chronologically.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a string is not a valid `"<MonthName> <Year>"` key
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid month key '{value}': expected \"<MonthName> <Year>\"")]
pub struct MonthKeyParseError {
    value: String,
}

impl MonthKeyParseError {
    /// The rejected input
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A calendar month (year + month), ordered chronologically
///
/// Parsing accepts full or abbreviated English month names in any case.
/// Display always renders the canonical form, e.g. `"March 2024"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey(NaiveDate);

impl MonthKey {
    /// Build a key from a year and a 1-based month number
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self)
    }

    /// Parse a `"<MonthName> <Year>"` string
    ///
    /// # Errors
    ///
    /// Returns `MonthKeyParseError` if the input does not consist of exactly
    /// a month name followed by a year.
    pub fn parse(value: &str) -> Result<Self, MonthKeyParseError> {
        let err = || MonthKeyParseError {
            value: value.to_string(),
        };

        let mut tokens = value.split_whitespace();
        let (month, year) = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(month), Some(year), None) => (month, year),
            _ => return Err(err()),
        };
        if !year.chars().all(|c| c.is_ascii_digit()) {
            return Err(err());
        }

        NaiveDate::parse_from_str(&format!("1 {} {}", month, year), "%d %B %Y")
            .map(Self)
            .map_err(|_| err())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month number, 1 through 12
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// First calendar day of this month
    pub fn first_day(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%B %Y"))
    }
}

impl FromStr for MonthKey {
    type Err = MonthKeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for MonthKey {
    type Error = MonthKeyParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> Self {
        key.to_string()
    }
}
