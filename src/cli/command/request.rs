use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::{
    cli::create_progress_bar,
    reading::{CalendarDate, DateSource},
    request::{RunContext, StationCode},
};

use super::{dates::dates, DEFAULT_STATIONS};

pub struct RequestOptions {
    pub csv: Option<PathBuf>,
    pub dates: Vec<CalendarDate>,
    pub stations: Vec<String>,
    pub output_dir: PathBuf,
    pub script: String,
}

pub fn request(options: RequestOptions, source: &dyn DateSource) -> Result<String> {
    let days = collect_dates(&options, source)?;
    let stations = station_codes(&options.stations);

    let total = (days.len() * stations.len()) as u64;
    let pb = create_progress_bar(total, "Writing requests...".to_string());
    let mut ctx = RunContext::new(&options.output_dir)
        .with_script_name(&options.script)
        .with_progress(pb.clone());

    for station in &stations {
        ctx.emit(&days, station)
            .with_context(|| format!("Unable to write requests for station `{}`", station))?;
    }

    pb.finish_with_message("Requests written");
    info!(
        documents = ctx.documents_written(),
        stations = stations.len(),
        "Batch script complete"
    );

    Ok(ctx.script_path().to_string_lossy().to_string())
}

// Dates from the CSV come first, followed by any given directly
fn collect_dates(options: &RequestOptions, source: &dyn DateSource) -> Result<Vec<CalendarDate>> {
    let mut days = match &options.csv {
        Some(csv) => dates(csv, source)?,
        None => Vec::new(),
    };
    days.extend(options.dates.iter().copied());

    Ok(days)
}

fn station_codes(stations: &[String]) -> Vec<StationCode> {
    if stations.is_empty() {
        return DEFAULT_STATIONS.iter().map(|s| StationCode::from(*s)).collect();
    }

    stations.iter().map(|s| StationCode::new(s.as_str())).collect()
}

// -- Tests -------------------------------------------------------------------
