//! CLI subcommand definitions

use std::path::PathBuf;

use clap::Subcommand;

/// Main CLI commands
#[derive(Debug, Clone, Subcommand, PartialEq)]
pub(crate) enum Commands {
    /// Generate the records file from the catalog (default)
    Generate,
    /// Check a records file against the catalog
    Verify {
        /// Records file to check
        records: PathBuf,
    },
    /// Show per-category totals for a records file
    Summary {
        /// Records file to summarize
        records: PathBuf,
    },
}
