//! Exercise catalog
//!
//! The read-only input listing of categories and their exercises.

mod loader;
pub(crate) mod types;

pub(crate) use loader::load_catalog;
pub(crate) use types::Catalog;
