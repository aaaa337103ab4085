//! Reads dates from a named column of a headered CSV file.
//!
//! Values are parsed leniently: ISO dates and datetimes, slash separated
//! dates (month first, falling back to day first when the month is out of
//! range), compact `YYYYMMDD` and RFC 3339 timestamps are all accepted. Only
//! the date part of a timestamp is kept.

use std::{fs::File, path::Path};

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, Trim};
use tracing::debug;

use crate::error::{Error, Result};

use super::{CalendarDate, DateSource};

pub const DEFAULT_COLUMN: &str = "Date";

const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
];

const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d", "%Y%m%d", "%m/%d/%Y", "%d/%m/%Y",
];

#[derive(Debug, Clone)]
pub struct DateColumn {
    column: String,
}

impl DateColumn {
    pub fn new(column: impl Into<String>) -> Self {
        DateColumn {
            column: column.into(),
        }
    }
}

impl Default for DateColumn {
    fn default() -> Self {
        DateColumn::new(DEFAULT_COLUMN)
    }
}

impl DateSource for DateColumn {
    fn read_dates(&self, path: &Path) -> Result<Vec<CalendarDate>> {
        let file = File::open(path).map_err(|e| Error::from_open(path.to_path_buf(), e))?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(file);

        let headers = reader
            .headers()
            .map_err(|e| Error::Csv(path.to_path_buf(), e))?;
        let index = headers
            .iter()
            .position(|h| h == self.column)
            .ok_or_else(|| Error::ColumnNotFound {
                path: path.to_path_buf(),
                column: self.column.clone(),
            })?;

        let mut dates = Vec::new();

        for record in reader.records() {
            let record = record.map_err(|e| Error::Csv(path.to_path_buf(), e))?;
            let value = record.get(index).unwrap_or_default();
            // Blank lines are skipped by the reader, so count from the record position
            let line = record.position().map_or(0, |p| p.line() as usize);
            let date = parse_date(value).ok_or_else(|| Error::Parse {
                path: path.to_path_buf(),
                line,
                value: value.to_string(),
            })?;
            dates.push(date);
        }

        debug!(path = %path.display(), count = dates.len(), "Read dates from column");

        Ok(dates)
    }
}

/// Parses a single cell into a date, trying the known layouts in order.
pub fn parse_date(value: &str) -> Option<CalendarDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.date_naive().into());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|datetime| datetime.date())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        })
        .map(CalendarDate::from)
}

// -- Tests -------------------------------------------------------------------
