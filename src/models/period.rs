//! Aggregation periods
//!
//! A [`Period`] is the scope tag chosen by the caller (`month`, `year`,
//! `all`); a [`PeriodFilter`] is that tag resolved against its value
//! (`YYYY-MM`, `YYYY`) into a date predicate. The strict calendar value
//! parsers used at the input boundary live here as well.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FintrackError;

/// Aggregation scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Month,
    Year,
    All,
}

impl Period {
    /// The lower-case tag used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::Year => "year",
            Self::All => "all",
        }
    }
}

impl FromStr for Period {
    type Err = FintrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            "all" => Ok(Self::All),
            _ => Err(FintrackError::Validation(
                "Invalid time period. Please use month, year, or all.".into(),
            )),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format of a transaction date
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date.
///
/// Only the exact ten-character shape is accepted: no sign, no padding
/// and no single-digit month or day.
pub fn parse_date_value(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Parse a `YYYY-MM` value into (year, month)
pub fn parse_month_value(value: &str) -> Option<(i32, u32)> {
    let (year, month) = value.split_once('-')?;
    if year.len() != 4 || month.len() != 2 {
        return None;
    }
    let year = parse_year_value(year)?;
    let month: u32 = if month.bytes().all(|b| b.is_ascii_digit()) {
        month.parse().ok()?
    } else {
        return None;
    };
    NaiveDate::from_ymd_opt(year, month, 1).map(|_| (year, month))
}

/// Parse a four-digit `YYYY` value
pub fn parse_year_value(value: &str) -> Option<i32> {
    if value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit()) {
        value.parse().ok()
    } else {
        None
    }
}

/// A period resolved into a date predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodFilter {
    Month { year: i32, month: u32 },
    Year(i32),
    All,
    /// A month/year value that failed to parse; matches no date
    Nothing,
}

impl PeriodFilter {
    /// Resolve a period tag and its value.
    ///
    /// The value is ignored for [`Period::All`]. A malformed value degrades to
    /// [`PeriodFilter::Nothing`] rather than an error.
    pub fn resolve(period: Period, value: &str) -> Self {
        match period {
            Period::Month => parse_month_value(value)
                .map(|(year, month)| Self::Month { year, month })
                .unwrap_or(Self::Nothing),
            Period::Year => parse_year_value(value).map(Self::Year).unwrap_or(Self::Nothing),
            Period::All => Self::All,
        }
    }

    /// Check if a date falls within this filter
    pub fn matches(&self, date: NaiveDate) -> bool {
        match *self {
            Self::Month { year, month } => date.year() == year && date.month() == month,
            Self::Year(year) => date.year() == year,
            Self::All => true,
            Self::Nothing => false,
        }
    }
}
