//! Serializable settings for the built-in providers
//!
//! These are the shapes read from `scout.toml`; loading and layering lives in
//! the CLI.

use super::index_config::{FileIndexConfig, DEFAULT_MAX_DEPTH, DEFAULT_MAX_FILES};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default merge priority of the application provider
pub const APPLICATIONS_PRIORITY: i32 = 100;

/// Default merge priority of the file search provider
pub const FILE_SEARCH_PRIORITY: i32 = 25;

/// Top-level settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub applications: ApplicationSettings,
    pub file_search: FileSearchSettings,
}

/// Settings for the application provider
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationSettings {
    pub enabled: bool,
    pub priority: i32,
    /// Pre-parsed launchable entries
    pub entries: Vec<ApplicationEntry>,
}

impl Default for ApplicationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            priority: APPLICATIONS_PRIORITY,
            entries: Vec::new(),
        }
    }
}

/// A launchable application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationEntry {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Shell command run on activation
    pub exec: String,
    /// Icon name or path
    #[serde(default)]
    pub icon: Option<String>,
}

impl ApplicationEntry {
    pub fn new(name: impl Into<String>, exec: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            exec: exec.into(),
            icon: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Settings for the file search provider
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSearchSettings {
    pub enabled: bool,
    pub priority: i32,
    /// Root directories; empty means the platform defaults chosen by the caller
    pub roots: Vec<PathBuf>,
    /// Extra directory names to skip, added to the built-in list
    pub ignore_dirs: Vec<String>,
    pub max_depth: usize,
    pub max_files: usize,
}

impl Default for FileSearchSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            priority: FILE_SEARCH_PRIORITY,
            roots: Vec::new(),
            ignore_dirs: Vec::new(),
            max_depth: DEFAULT_MAX_DEPTH,
            max_files: DEFAULT_MAX_FILES,
        }
    }
}

impl FileSearchSettings {
    /// Convert to an index configuration rooted at `roots`
    pub fn index_config(&self, roots: Vec<PathBuf>) -> FileIndexConfig {
        FileIndexConfig::new()
            .with_roots(roots)
            .with_ignored_dirs(self.ignore_dirs.iter().cloned())
            .with_max_depth(self.max_depth)
            .with_max_files(self.max_files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.applications.enabled);
        assert_eq!(settings.applications.priority, APPLICATIONS_PRIORITY);
        assert_eq!(settings.file_search.priority, FILE_SEARCH_PRIORITY);
        assert_eq!(settings.file_search.max_files, DEFAULT_MAX_FILES);
    }

    #[test]
    fn test_ignore_dirs_extend_defaults() {
        let settings = FileSearchSettings {
            ignore_dirs: vec!["photos".to_string()],
            ..Default::default()
        };
        let config = settings.index_config(vec![PathBuf::from("/tmp")]);
        assert!(config.ignored_dirs.contains("photos"));
        assert!(config.ignored_dirs.contains("node_modules"));
        assert_eq!(config.roots, vec![PathBuf::from("/tmp")]);
    }
}
