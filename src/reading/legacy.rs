//! Reads `DD/MM/YYYY` tokens from the first field of each line.
//!
//! This is the older export layout: the first line is a header and every
//! following line starts with a field such as `15/4/2024 00:00`. Only the date
//! token before the first whitespace is used.

use std::{
    fs::File,
    io::{self, BufRead},
    path::Path,
};

use tracing::debug;

use crate::error::{Error, Result};

use super::{CalendarDate, DateSource};

#[derive(Debug, Clone, Default)]
pub struct LegacyFirstField;

impl LegacyFirstField {
    pub fn from_line(line: &str) -> Option<CalendarDate> {
        let field = line.split(',').next()?;
        let token = field.split_whitespace().next()?;

        let parts: Vec<&str> = token.split('/').collect();
        if parts.len() != 3 {
            return None;
        }

        let day = parse_padded(parts[0])?;
        let month = parse_padded(parts[1])?;
        let year = parse_year(parts[2])?;

        CalendarDate::from_ymd(year, month, day)
    }
}

impl DateSource for LegacyFirstField {
    fn read_dates(&self, path: &Path) -> Result<Vec<CalendarDate>> {
        let file = File::open(path).map_err(|e| Error::from_open(path.to_path_buf(), e))?;
        let reader = io::BufReader::new(file);

        let mut dates = Vec::new();

        for (index, line) in reader.lines().enumerate().skip(1) {
            let line = line.map_err(|e| Error::Read(path.to_path_buf(), e))?;
            if line.trim().is_empty() {
                continue;
            }

            let date = LegacyFirstField::from_line(&line).ok_or_else(|| Error::Parse {
                path: path.to_path_buf(),
                line: index + 1,
                value: line.clone(),
            })?;
            dates.push(date);
        }

        debug!(path = %path.display(), count = dates.len(), "Read dates from first field");

        Ok(dates)
    }
}

// Day and month may be written without their leading zero
fn parse_padded(s: &str) -> Option<u32> {
    if s.is_empty() || s.len() > 2 || !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

// Two digit years are rejected rather than guessing a century
fn parse_year(s: &str) -> Option<i32> {
    if s.len() != 4 || !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

// -- Tests -------------------------------------------------------------------
