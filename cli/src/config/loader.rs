//! CLI configuration loader for Scout
//!
//! Resolves a single settings file in priority order:
//! 1. --config file (highest priority)
//! 2. Current working directory: ./scout.toml
//! 3. XDG config: $XDG_CONFIG_HOME/scout/scout.toml or ~/.config/scout/scout.toml
//! 4. Built-in defaults (no file)
//!
//! `SCOUT__SECTION__KEY` environment variables are layered on top of
//! whichever file was found.

use anyhow::{anyhow, Context, Result};
use scout_core::config::{FileSearchSettings, Settings};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings file name looked up in each location
pub const CONFIG_FILE_NAME: &str = "scout.toml";

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "SCOUT";

/// CLI configuration loader
#[derive(Debug, Default)]
pub struct CliConfigLoader {
    /// Override config file path
    config_override: Option<PathBuf>,
}

impl CliConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Set config file override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Load and resolve settings
    pub fn load(&self) -> Result<Settings> {
        let mut builder = config::Config::builder();

        match self.find_config_file()? {
            Some(path) => {
                debug!("Loading settings from {}", path.display());
                builder = builder.add_source(
                    config::File::from(path.as_path())
                        .format(config::FileFormat::Toml)
                        .required(true),
                );
            }
            None => debug!("No settings file found, using defaults"),
        }

        let settings: Settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Invalid settings")?;

        Ok(settings)
    }

    /// Find the settings file to load, if any
    fn find_config_file(&self) -> Result<Option<PathBuf>> {
        if let Some(override_path) = &self.config_override {
            if !override_path.is_file() {
                return Err(anyhow!(
                    "Config file not found: {}",
                    override_path.display()
                ));
            }
            return Ok(Some(override_path.clone()));
        }

        let cwd_config = std::env::current_dir()?.join(CONFIG_FILE_NAME);
        if cwd_config.is_file() {
            return Ok(Some(cwd_config));
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("scout").join(CONFIG_FILE_NAME);
            if xdg_config.is_file() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }
}

/// Root directories for the file index.
///
/// Configured roots have `~` and environment variables expanded. With no
/// roots configured, falls back to the user's documents, desktop and
/// downloads directories.
pub fn resolve_roots(settings: &FileSearchSettings) -> Result<Vec<PathBuf>> {
    if settings.roots.is_empty() {
        return Ok(default_roots());
    }

    settings.roots.iter().map(|root| expand_path(root)).collect()
}

fn default_roots() -> Vec<PathBuf> {
    [dirs::document_dir(), dirs::desktop_dir(), dirs::download_dir()]
        .into_iter()
        .flatten()
        .collect()
}

fn expand_path(path: &Path) -> Result<PathBuf> {
    let raw = path.to_string_lossy();
    let expanded = shellexpand::full(&raw)
        .with_context(|| format!("Failed to expand search root: {}", raw))?;
    Ok(PathBuf::from(expanded.as_ref()))
}
