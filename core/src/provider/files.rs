//! File search provider backed by the file index

use super::icons::{IconResolver, MimeIconResolver};
use super::item::{InvokeToken, ItemKind, SearchItem};
use super::{ProviderDescriptor, SearchProvider};
use crate::config::settings::FILE_SEARCH_PRIORITY;
use crate::config::FileIndexConfig;
use crate::error::{ConfigError, Result};
use crate::index::{FileIndex, IndexedFile};
use crate::matcher::{rank_by, FuzzyMatcher, MatchScore};
use std::path::PathBuf;
use std::sync::Arc;

/// Queries shorter than this return nothing
pub const MIN_QUERY_CHARS: usize = 2;

/// Maximum number of results per query
pub const MAX_RESULTS: usize = 50;

/// Score given to files listed by a bare directory query such as `docs/`
pub const PATH_MATCH_SCORE: i64 = 100;

/// Searches file names under configured roots
pub struct FileIndexProvider {
    descriptor: ProviderDescriptor,
    config: FileIndexConfig,
    index: FileIndex,
    matcher: FuzzyMatcher,
    icons: Arc<dyn IconResolver>,
}

impl FileIndexProvider {
    /// Create the provider and build its index
    pub fn new(config: FileIndexConfig) -> Self {
        let index = FileIndex::build(&config);
        Self {
            descriptor: ProviderDescriptor::new(
                "files",
                "File Search",
                "Searches files in configured directories",
            )
            .with_priority(FILE_SEARCH_PRIORITY),
            config,
            index,
            matcher: FuzzyMatcher::default(),
            icons: Arc::new(MimeIconResolver::new()),
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.descriptor.priority = priority;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.descriptor.enabled = enabled;
        self
    }

    pub fn with_icon_resolver(mut self, icons: Arc<dyn IconResolver>) -> Self {
        self.icons = icons;
        self
    }

    pub fn config(&self) -> &FileIndexConfig {
        &self.config
    }

    pub fn index(&self) -> &FileIndex {
        &self.index
    }

    pub fn file_count(&self) -> usize {
        self.index.len()
    }

    /// Add a root directory and rebuild the index.
    ///
    /// The root must be an existing directory.
    pub fn add_root(&mut self, root: impl Into<PathBuf>) -> Result<()> {
        let root = root.into();
        if !root.exists() {
            return Err(ConfigError::RootNotFound {
                path: root.display().to_string(),
            }
            .into());
        }
        if !root.is_dir() {
            return Err(ConfigError::RootNotDirectory {
                path: root.display().to_string(),
            }
            .into());
        }

        self.config.roots.push(root);
        self.rebuild();
        Ok(())
    }

    /// Skip directories with this name and rebuild the index
    pub fn add_ignored_dir(&mut self, name: impl Into<String>) {
        self.config.ignored_dirs.insert(name.into());
        self.rebuild();
    }

    /// Replace the snapshot with a freshly built one
    fn rebuild(&mut self) {
        self.index = FileIndex::build(&self.config);
    }

    fn item(&self, file: &IndexedFile, score: MatchScore) -> SearchItem {
        SearchItem {
            id: format!("file:{}", file.path_text),
            display_name: file.name.clone(),
            description: Some(file.path_text.clone()),
            icon: self.icons.resolve_file_icon(&file.path),
            kind: ItemKind::File,
            invoke: InvokeToken::Open(file.path.clone()),
            score: score.score,
            matched_positions: score.matched_positions,
        }
    }
}

/// Split a query at its last path separator.
///
/// Returns `(prefix, remainder)` where the prefix keeps the separator, or
/// `None` when the query has no separator.
pub fn split_path_query(query: &str) -> Option<(&str, &str)> {
    let idx = query.rfind(std::path::is_separator)?;
    // Separators are single-byte ASCII
    Some(query.split_at(idx + 1))
}

impl SearchProvider for FileIndexProvider {
    fn descriptor(&self) -> &ProviderDescriptor {
        &self.descriptor
    }

    fn descriptor_mut(&mut self) -> &mut ProviderDescriptor {
        &mut self.descriptor
    }

    fn description(&self) -> String {
        format!(
            "{} (currently indexing {} files)",
            self.descriptor.description,
            self.index.len()
        )
    }

    fn search(&self, query: &str) -> Vec<SearchItem> {
        if query.chars().count() < MIN_QUERY_CHARS {
            return Vec::new();
        }

        let files = self.index.files();
        let (candidates, term): (Vec<&IndexedFile>, &str) = match split_path_query(query) {
            Some((prefix, remainder)) if !prefix.is_empty() => (
                files
                    .iter()
                    .filter(|file| file.path_text.contains(prefix))
                    .collect(),
                remainder,
            ),
            Some((_, remainder)) => (files.iter().collect(), remainder),
            None => (files.iter().collect(), query),
        };

        if term.is_empty() {
            return candidates
                .into_iter()
                .take(MAX_RESULTS)
                .map(|file| self.item(file, MatchScore::fixed(PATH_MATCH_SCORE)))
                .collect();
        }

        rank_by(&candidates, term, MAX_RESULTS, |file, term| {
            self.matcher.score(&file.name, term)
        })
        .into_iter()
        .map(|ranked| self.item(candidates[ranked.index], ranked.score))
        .collect()
    }

    /// The whole index is too large to show unfiltered
    fn list_all(&self) -> Vec<SearchItem> {
        Vec::new()
    }

    fn refresh(&mut self) -> Result<()> {
        self.rebuild();
        Ok(())
    }
}
