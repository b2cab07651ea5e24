use serde::{Deserialize, Serialize};

/// One named group of exercises, e.g. "Push" or "Legs"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Category {
    pub(crate) name: String,
    pub(crate) exercises: Vec<String>,
}

/// Catalog file contents: `{ "categories": [ { "name", "exercises" } ] }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Catalog {
    pub(crate) categories: Vec<Category>,
}

impl Catalog {
    pub(crate) fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Whether `exercise` is listed under `category`
    pub(crate) fn contains(&self, category: &str, exercise: &str) -> bool {
        self.categories
            .iter()
            .any(|c| c.name == category && c.exercises.iter().any(|e| e == exercise))
    }
}
