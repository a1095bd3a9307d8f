//! Ignore rules applied while building the file index

use crate::config::FileIndexConfig;
use std::collections::HashSet;
use std::path::Path;

/// Leading character that marks hidden files and directories
pub const HIDDEN_MARKER: char = '.';

/// Directory, hidden-entry and extension rules
#[derive(Debug, Clone)]
pub struct IgnoreRules {
    ignored_dirs: HashSet<String>,
    hidden_marker: char,
    ignored_extensions: HashSet<String>,
}

impl IgnoreRules {
    /// Rules for an index configuration
    pub fn from_config(config: &FileIndexConfig) -> Self {
        Self {
            ignored_dirs: config.ignored_dirs.clone(),
            hidden_marker: HIDDEN_MARKER,
            ignored_extensions: config
                .ignored_extensions
                .iter()
                .map(|ext| ext.to_lowercase())
                .collect(),
        }
    }

    pub fn is_hidden(&self, name: &str) -> bool {
        name.starts_with(self.hidden_marker)
    }

    /// Whether traversal should not descend into a directory with this name
    pub fn skips_dir(&self, name: &str) -> bool {
        self.is_hidden(name) || self.ignored_dirs.contains(name)
    }

    /// Whether a file is excluded by its own name or extension
    pub fn skips_file(&self, path: &Path) -> bool {
        let hidden = path
            .file_name()
            .map(|name| self.is_hidden(&name.to_string_lossy()))
            .unwrap_or(false);
        if hidden {
            return true;
        }

        path.extension()
            .map(|ext| {
                self.ignored_extensions
                    .contains(&ext.to_string_lossy().to_lowercase())
            })
            .unwrap_or(false)
    }
}

impl Default for IgnoreRules {
    fn default() -> Self {
        Self::from_config(&FileIndexConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = IgnoreRules::default();
        assert!(rules.skips_dir(".git"));
        assert!(rules.skips_dir("node_modules"));
        assert!(!rules.skips_dir("docs"));

        assert!(rules.skips_file(Path::new(".hidden")));
        assert!(rules.skips_file(Path::new("report.tmp")));
        assert!(rules.skips_file(Path::new("logs/Server.LOG")));
        assert!(!rules.skips_file(Path::new("notes.txt")));
        assert!(!rules.skips_file(Path::new("docs/envelope.txt")));
    }

    #[test]
    fn test_custom_ignored_dir() {
        let config = FileIndexConfig::default().with_ignored_dirs(["photos"]);
        let rules = IgnoreRules::from_config(&config);
        assert!(rules.skips_dir("photos"));
        assert!(!rules.skips_file(Path::new("photos.txt")));
    }
}
