use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) catalog: Option<PathBuf>,
    #[serde(default)]
    pub(crate) output: Option<PathBuf>,
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    #[serde(default)]
    pub(crate) days: Option<u32>,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) no_color: bool,

    /// File this config came from
    #[serde(skip)]
    source: Option<PathBuf>,
    /// Files that existed but could not be used
    #[serde(skip)]
    skipped: Vec<(PathBuf, String)>,
}

impl Config {
    /// Load the first readable config file. Runs before logging is set up, so
    /// what happened is recorded and reported later by [`Config::log_origin`].
    pub(crate) fn load() -> Self {
        Self::load_from(&Self::get_config_paths())
    }

    fn load_from(paths: &[PathBuf]) -> Self {
        let mut skipped = Vec::new();

        for path in paths {
            if !path.exists() {
                continue;
            }
            let content = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    skipped.push((path.clone(), e.to_string()));
                    continue;
                }
            };
            match toml::from_str::<Config>(&content) {
                Ok(mut config) => {
                    config.source = Some(path.clone());
                    config.skipped = skipped;
                    return config;
                }
                Err(e) => skipped.push((path.clone(), e.to_string())),
            }
        }

        Config {
            skipped,
            ..Self::default()
        }
    }

    pub(crate) fn log_origin(&self) {
        for (path, reason) in &self.skipped {
            warn!("Failed to parse {}: {}", path.display(), reason);
        }
        if let Some(path) = &self.source {
            debug!("Loaded config from {}", path.display());
        }
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/workout-fixtures/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(
                home.join(".config")
                    .join("workout-fixtures")
                    .join("config.toml"),
            );
        }

        // 2. Platform config dir, e.g. ~/Library/Application Support/workout-fixtures/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("workout-fixtures").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.workout-fixtures.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".workout-fixtures.toml"));
        }

        paths
    }
}
