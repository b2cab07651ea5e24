use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Failed to read catalog {}: {source}", .path.display())]
    CatalogRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse catalog {}: {source}", .path.display())]
    CatalogParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Catalog {} has no categories", .path.display())]
    EmptyCatalog { path: PathBuf },

    #[error("Failed to read records {}: {source}", .path.display())]
    RecordsRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse records {}: {source}", .path.display())]
    RecordsParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{0}")]
    Sampling(#[from] SamplingError),

    #[error("Failed to serialize records: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Window of {days} days ending {end} starts before the earliest supported date")]
    InvalidWindow { end: NaiveDate, days: u32 },

    #[error("Verification found {violations} violation(s)")]
    VerificationFailed { violations: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum SamplingError {
    #[error(
        "Exercise pool on {date} has {available} entries, at least {required} are needed"
    )]
    PoolTooSmall {
        date: NaiveDate,
        required: usize,
        available: usize,
    },
}
