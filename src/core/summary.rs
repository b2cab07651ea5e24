//! Per-category aggregation over a records document

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::types::RecordsDocument;

/// Totals for one category across all records
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub(crate) struct CategorySummary {
    pub(crate) category: String,
    /// Records with at least one entry from this category
    pub(crate) days: usize,
    pub(crate) entries: usize,
    pub(crate) avg_reps: f64,
    pub(crate) avg_weight: f64,
}

#[derive(Debug, Default)]
struct CategoryAccumulator {
    days: usize,
    entries: usize,
    reps: u64,
    weight: f64,
}

impl CategoryAccumulator {
    fn finish(self, category: String) -> CategorySummary {
        let n = self.entries.max(1) as f64;
        CategorySummary {
            category,
            days: self.days,
            entries: self.entries,
            avg_reps: self.reps as f64 / n,
            avg_weight: self.weight / n,
        }
    }
}

/// Summaries sorted by category name
pub(crate) fn summarize_categories(doc: &RecordsDocument) -> Vec<CategorySummary> {
    let mut acc: BTreeMap<&str, CategoryAccumulator> = BTreeMap::new();

    for record in &doc.records {
        let mut touched: Vec<&str> = Vec::new();
        for workout in &record.workouts {
            let entry = acc.entry(workout.category.as_str()).or_default();
            entry.entries += 1;
            entry.reps += u64::from(workout.reps);
            entry.weight += workout.weight;
            if !touched.contains(&workout.category.as_str()) {
                touched.push(workout.category.as_str());
                entry.days += 1;
            }
        }
    }

    acc.into_iter()
        .map(|(name, a)| a.finish(name.to_string()))
        .collect()
}
