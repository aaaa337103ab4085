pub mod calendar_date;
pub mod date_column;
pub mod legacy;

use std::path::Path;

use crate::error::Result;

pub use calendar_date::CalendarDate;
pub use date_column::DateColumn;
pub use legacy::LegacyFirstField;

// A strategy for turning a tabular input file into dates, in row order
pub trait DateSource {
    fn read_dates(&self, path: &Path) -> Result<Vec<CalendarDate>>;
}
