//! Consistency checks for a records document against its catalog

use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDate;

use crate::catalog::Catalog;
use crate::consts::{
    EXERCISES_PER_DAY, MAX_DAY_ADVANCE, REPS_RANGE, REST_SECONDS_CHOICES, WEIGHT_RANGE,
    WEIGHT_UNIT,
};
use crate::core::generator::DateWindow;
use crate::core::types::{DailyRecord, RecordsDocument, WorkoutEntry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Violation {
    pub(crate) date: Option<NaiveDate>,
    pub(crate) message: String,
}

impl Violation {
    fn on(date: NaiveDate, message: String) -> Self {
        Violation {
            date: Some(date),
            message,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.date {
            Some(date) => write!(f, "{date}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Check every record of `doc`; with `window`, also check the date coverage.
pub(crate) fn verify_records(
    doc: &RecordsDocument,
    catalog: &Catalog,
    window: Option<DateWindow>,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    if let Some(window) = window {
        check_window(doc, window, &mut violations);
    }

    let mut previous: Option<NaiveDate> = None;
    for record in &doc.records {
        if let Some(prev) = previous {
            let gap = (record.date - prev).num_days();
            if gap < 1 {
                violations.push(Violation::on(
                    record.date,
                    format!("date does not advance past {prev}"),
                ));
            } else if gap > MAX_DAY_ADVANCE {
                violations.push(Violation::on(
                    record.date,
                    format!("{gap} days after {prev}, at most {MAX_DAY_ADVANCE} allowed"),
                ));
            }
        }
        previous = Some(record.date);

        check_record(record, catalog, &mut violations);
    }

    violations
}

fn check_window(doc: &RecordsDocument, window: DateWindow, violations: &mut Vec<Violation>) {
    let Some(first) = doc.first_date() else {
        violations.push(Violation {
            date: None,
            message: "document has no records".to_string(),
        });
        return;
    };
    if first != window.start {
        violations.push(Violation::on(
            first,
            format!("first record should be on {}", window.start),
        ));
    }
    for record in &doc.records {
        if !window.contains(record.date) {
            violations.push(Violation::on(
                record.date,
                format!("outside window {}..={}", window.start, window.end),
            ));
        }
    }
}

fn check_record(record: &DailyRecord, catalog: &Catalog, violations: &mut Vec<Violation>) {
    let (min, max) = EXERCISES_PER_DAY;
    let count = record.workouts.len();
    if !(min..=max).contains(&count) {
        violations.push(Violation::on(
            record.date,
            format!("{count} workouts, expected {min}..={max}"),
        ));
    }

    let mut seen = HashSet::new();
    for workout in &record.workouts {
        if !seen.insert((workout.category.as_str(), workout.exercise.as_str())) {
            violations.push(Violation::on(
                record.date,
                format!("{} / {} appears twice", workout.category, workout.exercise),
            ));
        }
        check_workout(record.date, workout, catalog, violations);
    }
}

fn check_workout(
    date: NaiveDate,
    workout: &WorkoutEntry,
    catalog: &Catalog,
    violations: &mut Vec<Violation>,
) {
    let label = format!("{} / {}", workout.category, workout.exercise);

    if catalog.category(&workout.category).is_none() {
        violations.push(Violation::on(
            date,
            format!("unknown category \"{}\"", workout.category),
        ));
    } else if !catalog.contains(&workout.category, &workout.exercise) {
        violations.push(Violation::on(
            date,
            format!("{label}: exercise not in catalog"),
        ));
    }

    if !(REPS_RANGE.0..=REPS_RANGE.1).contains(&workout.reps) {
        violations.push(Violation::on(
            date,
            format!("{label}: reps {} out of range", workout.reps),
        ));
    }
    if !(WEIGHT_RANGE.0..=WEIGHT_RANGE.1).contains(&workout.weight) {
        violations.push(Violation::on(
            date,
            format!("{label}: weight {} out of range", workout.weight),
        ));
    }
    if !has_one_decimal(workout.weight) {
        violations.push(Violation::on(
            date,
            format!("{label}: weight {} has more than one decimal", workout.weight),
        ));
    }
    if workout.unit != WEIGHT_UNIT {
        violations.push(Violation::on(
            date,
            format!("{label}: unit \"{}\" is not {WEIGHT_UNIT}", workout.unit),
        ));
    }
    if !REST_SECONDS_CHOICES.contains(&workout.rest_seconds) {
        violations.push(Violation::on(
            date,
            format!("{label}: rest {}s not allowed", workout.rest_seconds),
        ));
    }
}

fn has_one_decimal(value: f64) -> bool {
    let scaled = value * 10.0;
    (scaled.round() - scaled).abs() < 1e-6
}
