use std::fs;
use std::path::Path;

use tracing::info;

use crate::core::{CategorySummary, RecordsDocument};
use crate::error::AppError;

/// Path value that sends the document to stdout instead of a file
pub(crate) const STDOUT_PATH: &str = "-";

/// Pretty JSON with 2-space indentation; non-ASCII text is written as-is.
pub(crate) fn records_json(doc: &RecordsDocument) -> Result<String, AppError> {
    serde_json::to_string_pretty(doc).map_err(AppError::Serialize)
}

/// Write `doc` to `path`, replacing any existing file
pub(crate) fn write_records(doc: &RecordsDocument, path: &Path) -> Result<(), AppError> {
    let json = records_json(doc)?;

    if path.as_os_str() == STDOUT_PATH {
        println!("{json}");
        return Ok(());
    }

    fs::write(path, format!("{json}\n")).map_err(|source| AppError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        records = doc.records.len(),
        workouts = doc.workout_count(),
        "wrote records"
    );
    Ok(())
}

/// Read a records document previously written by `write_records`
pub(crate) fn read_records(path: &Path) -> Result<RecordsDocument, AppError> {
    let content = fs::read_to_string(path).map_err(|source| AppError::RecordsRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| AppError::RecordsParse {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn output_summary_json(summary: &[CategorySummary]) -> Result<String, AppError> {
    serde_json::to_string_pretty(summary).map_err(AppError::Serialize)
}
