//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};

use crate::config::Config;
use crate::consts::{DEFAULT_CATALOG_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_SEED, DEFAULT_WINDOW_DAYS};
use crate::error::AppError;
use crate::utils::parse_date;

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Debug, Parser)]
#[command(name = "workout-fixtures")]
#[command(about = "Generate reproducible workout-log fixture data", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Exercise catalog to sample from
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) catalog: Option<PathBuf>,

    /// Records file to write ("-" for stdout)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub(crate) output: Option<PathBuf>,

    /// Random seed; the same seed, catalog and end date give identical output
    #[arg(long, global = true)]
    pub(crate) seed: Option<u64>,

    /// Last day of the window (YYYYMMDD or YYYY-MM-DD, default: today)
    #[arg(long, global = true, value_name = "DATE")]
    pub(crate) end_date: Option<String>,

    /// Window length in days, counted back from the end date (verify: only with --end-date)
    #[arg(long, global = true)]
    pub(crate) days: Option<u32>,

    /// Print a per-category table after generating
    #[arg(long, global = true)]
    pub(crate) summary: bool,

    /// Output summaries as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.debug && config.debug {
            self.debug = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }

        if self.catalog.is_none() {
            self.catalog = config.catalog.clone();
        }
        if self.output.is_none() {
            self.output = config.output.clone();
        }
        if self.seed.is_none() {
            self.seed = config.seed;
        }
        if self.days.is_none() {
            self.days = config.days;
        }

        self
    }

    pub(crate) fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Generate)
    }

    pub(crate) fn catalog_path(&self) -> PathBuf {
        self.catalog
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH))
    }

    pub(crate) fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH))
    }

    pub(crate) fn seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }

    pub(crate) fn days(&self) -> u32 {
        self.days.unwrap_or(DEFAULT_WINDOW_DAYS)
    }

    /// The explicit `--end-date`, if one was given
    pub(crate) fn pinned_end_date(&self) -> Result<Option<NaiveDate>, AppError> {
        self.end_date.as_deref().map(parse_date).transpose()
    }

    /// `--end-date`, or today's local date
    pub(crate) fn end_date(&self) -> Result<NaiveDate, AppError> {
        Ok(self
            .pinned_end_date()?
            .unwrap_or_else(|| Local::now().date_naive()))
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}
