//! Bounded, rule-filtered snapshot of files under configured roots
//!
//! The index is built once and rebuilt wholesale on configuration changes.
//! There is no persistence and no filesystem watching.

pub mod rules;
pub mod walker;


pub use rules::IgnoreRules;
pub use walker::list_files_under;

use crate::config::FileIndexConfig;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, warn};

/// One indexed file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedFile {
    /// Full path to the file
    pub path: PathBuf,

    /// File name only; this is what queries are matched against
    pub name: String,

    /// Full path as text, for prefix restriction
    pub path_text: String,
}

impl IndexedFile {
    fn from_path(path: PathBuf) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy().into_owned();
        let path_text = path.to_string_lossy().into_owned();
        Some(Self {
            path,
            name,
            path_text,
        })
    }
}

/// Immutable snapshot of indexed files in traversal order
#[derive(Debug, Clone, Default)]
pub struct FileIndex {
    files: Vec<IndexedFile>,
}

impl FileIndex {
    /// Walk every root in order until `max_files` is reached.
    ///
    /// Missing or non-directory roots are logged and skipped.
    pub fn build(config: &FileIndexConfig) -> Self {
        let started = Instant::now();
        let rules = IgnoreRules::from_config(config);
        let mut files = Vec::new();

        for root in &config.roots {
            let remaining = config.max_files.saturating_sub(files.len());
            if remaining == 0 {
                debug!("File limit {} reached, skipping remaining roots", config.max_files);
                break;
            }

            if !root.is_dir() {
                warn!("Search root is not an accessible directory: {}", root.display());
                continue;
            }

            let found = list_files_under(root, config.max_depth, &rules, remaining);
            debug!("Indexed {} files under {}", found.len(), root.display());
            files.extend(found.into_iter().filter_map(IndexedFile::from_path));
        }

        debug!(
            "File index built: {} files from {} roots in {:?}",
            files.len(),
            config.roots.len(),
            started.elapsed()
        );

        Self { files }
    }

    pub fn files(&self) -> &[IndexedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
