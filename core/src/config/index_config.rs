//! File index configuration and settings

use std::collections::HashSet;
use std::path::PathBuf;

/// Default traversal depth below each root
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Default cap on indexed files across all roots
pub const DEFAULT_MAX_FILES: usize = 1000;

/// Directory names skipped while indexing
pub const DEFAULT_IGNORED_DIRS: &[&str] = &[
    "node_modules",
    "vendor",
    ".git",
    ".svn",
    ".hg",
    "build",
    "dist",
    "target",
    ".cache",
    "__pycache__",
    ".pytest_cache",
    ".mypy_cache",
    "coverage",
    ".coverage",
    ".tox",
    "venv",
    ".venv",
    "env",
    ".env",
];

/// Temporary, log and cache-like extensions, compared lower-cased
pub const DEFAULT_IGNORED_EXTENSIONS: &[&str] = &["tmp", "temp", "log", "cache"];

/// Configuration for file index behavior
#[derive(Debug, Clone)]
pub struct FileIndexConfig {
    /// Root directories, indexed in this order
    pub roots: Vec<PathBuf>,

    /// Directory names whose contents are never indexed
    pub ignored_dirs: HashSet<String>,

    /// File extensions (without dot, lower-case) that are never indexed
    pub ignored_extensions: HashSet<String>,

    /// Maximum directory depth to search; files directly in a root are depth 1
    pub max_depth: usize,

    /// Maximum number of files kept in the index
    pub max_files: usize,
}

impl Default for FileIndexConfig {
    fn default() -> Self {
        Self {
            roots: Vec::new(),
            ignored_dirs: DEFAULT_IGNORED_DIRS.iter().map(|s| s.to_string()).collect(),
            ignored_extensions: DEFAULT_IGNORED_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_depth: DEFAULT_MAX_DEPTH,
            max_files: DEFAULT_MAX_FILES,
        }
    }
}

impl FileIndexConfig {
    /// Create a new index config with default rules and no roots
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root directories
    pub fn with_roots<I, P>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.roots = roots.into_iter().map(Into::into).collect();
        self
    }

    /// Add directory names to skip, on top of the current set
    pub fn with_ignored_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_dirs.extend(names.into_iter().map(Into::into));
        self
    }

    /// Set maximum search depth
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set maximum number of indexed files
    pub fn with_max_files(mut self, max: usize) -> Self {
        self.max_files = max;
        self
    }
}
