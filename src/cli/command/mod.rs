pub mod dates;
pub mod request;

use crate::reading::{DateColumn, DateSource, LegacyFirstField};

pub use dates::dates;
pub use request::{request, RequestOptions};

/// Stations requested when none are given on the command line.
pub const DEFAULT_STATIONS: [&str; 5] = ["i01ar", "i11cv", "i42pt", "i37no", "i56us"];

pub fn date_source(legacy: bool, column: &str) -> Box<dyn DateSource> {
    if legacy {
        Box::new(LegacyFirstField)
    } else {
        Box::new(DateColumn::new(column))
    }
}
