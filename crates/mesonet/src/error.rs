//! Error types for the mesonet crate.

use thiserror::Error;

/// Errors that can occur while fetching or parsing station data.
#[derive(Error, Debug)]
pub enum MesonetError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to read snapshot file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed station directory row at line {line}: {reason}")]
    MalformedDirectoryRow { line: u64, reason: String },

    #[error("Observation snapshot has {count} malformed row(s), first at line {first_line}")]
    MalformedObservations { count: usize, first_line: u64 },
}

/// Result type for mesonet operations.
pub type Result<T> = std::result::Result<T, MesonetError>;
