use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Results file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("Column {index} out of range for {} ({width} columns)", path.display())]
    ColumnOutOfRange {
        path: PathBuf,
        index: usize,
        width: usize,
    },

    #[error("Polynomial needs at least one coefficient")]
    EmptyPolynomial,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Display error: {0}")]
    Display(String),
}

impl From<config::ConfigError> for PlotError {
    fn from(err: config::ConfigError) -> Self {
        PlotError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PlotError>;
