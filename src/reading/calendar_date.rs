//! Normalised calendar date.

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A validated date, rendered as `YYYY/MM/DD`.
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Returns `None` when the components do not name a real day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(CalendarDate)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Zero-padded `(YYYY, MM, DD)` as used in file names.
    pub fn path_parts(&self) -> (String, String, String) {
        (
            format!("{:04}", self.year()),
            format!("{:02}", self.month()),
            format!("{:02}", self.day()),
        )
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        CalendarDate(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day) = self.path_parts();
        write!(f, "{}/{}/{}", year, month, day)
    }
}

impl FromStr for CalendarDate {
    type Err = chrono::ParseError;

    /// Parses the canonical `YYYY/MM/DD` form only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y/%m/%d").map(CalendarDate)
    }
}

// -- Tests -------------------------------------------------------------------
