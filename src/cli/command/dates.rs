use std::path::Path;

use anyhow::{Context, Result};

use crate::reading::{CalendarDate, DateSource};

pub fn dates(csv: &Path, source: &dyn DateSource) -> Result<Vec<CalendarDate>> {
    let dates = source
        .read_dates(csv)
        .with_context(|| format!("Unable to read dates from `{}`", csv.display()))?;

    Ok(dates)
}

// -- Tests -------------------------------------------------------------------
