use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to parse date '{value}' on line {line} of '{path}'")]
    Parse {
        path: PathBuf,
        line: usize,
        value: String,
    },

    #[error("Input file '{0}' not found")]
    FileNotFound(PathBuf),

    #[error("Column '{column}' not found in '{path}'")]
    ColumnNotFound { path: PathBuf, column: String },

    #[error("Failed to read '{0}'")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse CSV in '{0}'")]
    Csv(PathBuf, #[source] csv::Error),

    #[error("Failed to write '{0}'")]
    Write(PathBuf, #[source] std::io::Error),
}

impl Error {
    /// Maps a failed open of an input file, keeping missing files distinct.
    pub fn from_open(path: PathBuf, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Error::FileNotFound(path),
            _ => Error::Read(path, err),
        }
    }
}
