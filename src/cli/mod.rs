//! Command line interface.

pub mod command;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use crate::reading::{date_column::DEFAULT_COLUMN, CalendarDate};

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Contains the commands
pub struct Cli {
    /// Log every request file as it is written
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the dates read from a CSV file
    Dates {
        /// CSV file with one date per row
        csv: PathBuf,

        /// Read `DD/MM/YYYY` from the first field of each line
        #[arg(long)]
        legacy: bool,

        /// Name of the date column
        #[arg(long, default_value = DEFAULT_COLUMN, conflicts_with = "legacy")]
        column: String,
    },
    /// Write request files and the nms_client batch script
    Request {
        /// CSV file with one date per row
        #[arg(required_unless_present = "dates")]
        csv: Option<PathBuf>,

        /// Date to request, instead of or in addition to the CSV
        #[arg(long = "date", value_name = "YYYY/MM/DD")]
        dates: Vec<CalendarDate>,

        /// Station code, may be repeated
        #[arg(short, long = "station", value_name = "CODE")]
        stations: Vec<String>,

        /// Read `DD/MM/YYYY` from the first field of each line
        #[arg(long)]
        legacy: bool,

        /// Name of the date column
        #[arg(long, default_value = DEFAULT_COLUMN, conflicts_with = "legacy")]
        column: String,

        /// Directory for the request files and the script
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// File name of the batch script
        #[arg(long, default_value = crate::request::DEFAULT_SCRIPT_NAME)]
        script: String,
    },
}

/// Creates a progress bar.
pub fn create_progress_bar(size: u64, message: String) -> ProgressBar {
    ProgressBar::new(size).with_message(message).with_style(
        ProgressStyle::with_template("[{eta_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-"),
    )
}

// -- Tests -------------------------------------------------------------------
