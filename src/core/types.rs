//! Generated record types
//!
//! Field order here is the key order in the written JSON document.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One synthesized exercise performance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct WorkoutEntry {
    pub(crate) category: String,
    pub(crate) exercise: String,
    pub(crate) reps: u32,
    /// Rounded to one decimal place
    pub(crate) weight: f64,
    pub(crate) unit: String,
    pub(crate) rest_seconds: u32,
}

/// All entries synthesized for one calendar date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct DailyRecord {
    /// Serialized as YYYY-MM-DD
    pub(crate) date: NaiveDate,
    pub(crate) workouts: Vec<WorkoutEntry>,
}

/// Top-level output document: `{ "records": [...] }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct RecordsDocument {
    pub(crate) records: Vec<DailyRecord>,
}

impl RecordsDocument {
    pub(crate) fn workout_count(&self) -> usize {
        self.records.iter().map(|r| r.workouts.len()).sum()
    }

    pub(crate) fn first_date(&self) -> Option<NaiveDate> {
        self.records.first().map(|r| r.date)
    }

    pub(crate) fn last_date(&self) -> Option<NaiveDate> {
        self.records.last().map(|r| r.date)
    }
}
