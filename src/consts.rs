/// Standard date format used throughout the codebase: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

pub(crate) const DEFAULT_CATALOG_PATH: &str = "assets/default_exercises.json";
pub(crate) const DEFAULT_OUTPUT_PATH: &str = "assets/test_records.json";

/// Seed used when neither the CLI nor the config file sets one
pub(crate) const DEFAULT_SEED: u64 = 42;

/// Length of the generated window, counted back from the end date
pub(crate) const DEFAULT_WINDOW_DAYS: u32 = 365;

/// Every synthesized weight is recorded in kilograms
pub(crate) const WEIGHT_UNIT: &str = "kg";

pub(crate) const REST_SECONDS_CHOICES: [u32; 3] = [60, 90, 120];

pub(crate) const CATEGORIES_PER_DAY: (usize, usize) = (1, 2);
pub(crate) const EXERCISES_PER_DAY: (usize, usize) = (3, 5);
pub(crate) const REPS_RANGE: (u32, u32) = (5, 15);
pub(crate) const WEIGHT_RANGE: (f64, f64) = (10.0, 100.0);
pub(crate) const MAX_DAY_ADVANCE: i64 = 3;
