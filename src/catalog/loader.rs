use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::types::Catalog;
use crate::error::AppError;

/// Read and validate the catalog at `path`
pub(crate) fn load_catalog(path: &Path) -> Result<Catalog, AppError> {
    let content = fs::read_to_string(path).map_err(|source| AppError::CatalogRead {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_catalog(&content, path)?;

    debug!(
        path = %path.display(),
        categories = catalog.categories.len(),
        "loaded catalog"
    );
    Ok(catalog)
}

fn parse_catalog(content: &str, path: &Path) -> Result<Catalog, AppError> {
    let catalog: Catalog =
        serde_json::from_str(content).map_err(|source| AppError::CatalogParse {
            path: path.to_path_buf(),
            source,
        })?;

    if catalog.categories.is_empty() {
        return Err(AppError::EmptyCatalog {
            path: path.to_path_buf(),
        });
    }

    // Small categories are legal on their own; a day only fails when its
    // combined pool is too small to sample from.
    for category in &catalog.categories {
        if category.exercises.is_empty() {
            warn!(category = %category.name, "category lists no exercises");
        }
    }

    Ok(catalog)
}
