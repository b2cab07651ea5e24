//! Core module - record types, generation, and checks

mod generator;
mod sampler;
mod summary;
pub(crate) mod types;
mod verify;

pub(crate) use generator::{DateWindow, FixtureGenerator};
pub(crate) use summary::{CategorySummary, summarize_categories};
pub(crate) use types::RecordsDocument;
pub(crate) use verify::{Violation, verify_records};
