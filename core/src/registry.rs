//! Provider registry merging results from every enabled provider

use crate::provider::{SearchItem, SearchProvider};
use std::cmp::Reverse;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Owns the providers and merges their results in priority order
///
/// Built once during setup and passed by reference to whatever needs to
/// query it.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: Vec<Box<dyn SearchProvider>>,
}

impl ProviderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider.
    ///
    /// Providers stay sorted by descending priority; equal priorities keep
    /// registration order.
    pub fn register(&mut self, provider: Box<dyn SearchProvider>) {
        debug!(
            "Registering provider '{}' with priority {}",
            provider.id(),
            provider.priority()
        );
        self.providers.push(provider);
        self.providers.sort_by_key(|p| Reverse(p.priority()));
    }

    /// Builder-style [`register`](Self::register)
    pub fn with_provider(mut self, provider: Box<dyn SearchProvider>) -> Self {
        self.register(provider);
        self
    }

    /// Query every enabled provider.
    ///
    /// An empty query lists each provider's default items instead. Results
    /// are concatenated in provider order without re-sorting.
    pub fn search(&self, query: &str) -> SearchResults {
        let mut items = Vec::new();

        for provider in self.enabled() {
            let found = if query.is_empty() {
                provider.list_all()
            } else {
                provider.search(query)
            };
            debug!("Provider '{}' returned {} items", provider.id(), found.len());
            items.extend(found);
        }

        SearchResults::new(items)
    }

    /// Providers in merge order, disabled ones included
    pub fn providers(&self) -> impl Iterator<Item = &dyn SearchProvider> {
        self.providers.iter().map(|p| &**p)
    }

    fn enabled(&self) -> impl Iterator<Item = &dyn SearchProvider> {
        self.providers().filter(|p| p.is_enabled())
    }

    pub fn get(&self, id: &str) -> Option<&dyn SearchProvider> {
        self.providers().find(|p| p.id() == id)
    }

    /// Enable or disable a provider by id; returns false when no such provider exists
    pub fn set_enabled(&mut self, id: &str, enabled: bool) -> bool {
        match self.providers.iter_mut().find(|p| p.id() == id) {
            Some(provider) => {
                provider.descriptor_mut().enabled = enabled;
                true
            }
            None => false,
        }
    }

    /// Rebuild every provider's cached state; failures are logged and skipped
    pub fn refresh_all(&mut self) {
        for provider in &mut self.providers {
            if let Err(err) = provider.refresh() {
                warn!("Failed to refresh provider '{}': {}", provider.id(), err);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

/// Ordered results of one query, addressable by position or item id
#[derive(Debug, Clone, Default)]
pub struct SearchResults {
    items: Vec<SearchItem>,
    by_id: HashMap<String, usize>,
}

impl SearchResults {
    pub fn new(items: Vec<SearchItem>) -> Self {
        let mut by_id = HashMap::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            by_id.entry(item.id.clone()).or_insert(index);
        }
        Self { items, by_id }
    }

    pub fn items(&self) -> &[SearchItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&SearchItem> {
        self.items.get(index)
    }

    /// First item with this id
    pub fn find(&self, id: &str) -> Option<&SearchItem> {
        self.by_id.get(id).and_then(|&index| self.items.get(index))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SearchItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<SearchItem> {
        self.items
    }
}

impl<'a> IntoIterator for &'a SearchResults {
    type Item = &'a SearchItem;
    type IntoIter = std::slice::Iter<'a, SearchItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
