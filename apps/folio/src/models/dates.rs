//! Flexible date stamps for content frontmatter and travel data.
//!
//! Frontmatter dates come in three precisions (`2024`, `2024-03`,
//! `2024-03-15`); experience end dates may also be the literal string
//! `present`, meaning an ongoing position. A stamp remembers its precision
//! so it serializes back to the exact string it was written as.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::FolioError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DatePrecision {
    Year,
    Month,
    Day,
}

/// A date with year, year-month, or full-day precision.
///
/// Ordering compares the denoted date (missing month/day default to 1), so
/// stamps of mixed precision sort together on one timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateStamp {
    date: NaiveDate,
    precision: DatePrecision,
}

impl DateStamp {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        Some(Self {
            date: NaiveDate::from_ymd_opt(year, month, day)?,
            precision: DatePrecision::Day,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn precision(&self) -> DatePrecision {
        self.precision
    }

    /// Short display form used in date ranges, e.g. "Feb 2023".
    pub fn month_year(&self) -> String {
        self.date.format("%b %Y").to_string()
    }
}

impl FromStr for DateStamp {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FolioError::InvalidDate(s.to_string());

        let mut parts = s.trim().splitn(3, '-');
        let year: i32 = parts
            .next()
            .filter(|y| y.len() == 4)
            .and_then(|y| y.parse().ok())
            .ok_or_else(invalid)?;

        let (month, precision) = match parts.next() {
            Some(m) => (m.parse::<u32>().map_err(|_| invalid())?, DatePrecision::Month),
            None => (1, DatePrecision::Year),
        };
        let (day, precision) = match parts.next() {
            Some(d) => (d.parse::<u32>().map_err(|_| invalid())?, DatePrecision::Day),
            None => (1, precision),
        };

        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)?;
        Ok(Self { date, precision })
    }
}

impl fmt::Display for DateStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.precision {
            DatePrecision::Year => write!(f, "{}", self.date.format("%Y")),
            DatePrecision::Month => write!(f, "{}", self.date.format("%Y-%m")),
            DatePrecision::Day => write!(f, "{}", self.date.format("%Y-%m-%d")),
        }
    }
}

impl Serialize for DateStamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateStamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StampVisitor;

        impl de::Visitor<'_> for StampVisitor {
            type Value = DateStamp;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a date string (YYYY, YYYY-MM, or YYYY-MM-DD)")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map_err(E::custom)
            }

            // Unquoted `date: 2024` arrives as an integer scalar in YAML.
            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                v.to_string().parse().map_err(E::custom)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                v.to_string().parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(StampVisitor)
    }
}

/// The end of a date range: a concrete stamp, or `present` for an
/// unterminated/ongoing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndDate {
    Date(DateStamp),
    Present,
}

impl EndDate {
    pub fn is_present(&self) -> bool {
        matches!(self, EndDate::Present)
    }
}

impl Serialize for EndDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            EndDate::Date(stamp) => stamp.serialize(serializer),
            EndDate::Present => serializer.serialize_str("present"),
        }
    }
}

impl<'de> Deserialize<'de> for EndDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.trim().eq_ignore_ascii_case("present") {
            return Ok(EndDate::Present);
        }
        raw.parse().map(EndDate::Date).map_err(de::Error::custom)
    }
}

/// Formats a start/end pair for display, e.g. "Feb 2023 — Sep 2023" or
/// "Jan 2026 — Present".
pub fn format_date_range(start: &DateStamp, end: &EndDate) -> String {
    match end {
        EndDate::Present => format!("{} — Present", start.month_year()),
        EndDate::Date(end) => format!("{} — {}", start.month_year(), end.month_year()),
    }
}
