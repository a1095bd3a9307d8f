//! Provider over a pre-parsed list of launchable applications

use super::icons::{IconResolver, MimeIconResolver};
use super::item::{InvokeToken, ItemKind, SearchItem};
use super::{ProviderDescriptor, SearchProvider};
use crate::config::settings::APPLICATIONS_PRIORITY;
use crate::config::ApplicationEntry;
use crate::matcher::{rank_by, FuzzyMatcher, MatchScore};
use std::sync::Arc;
use tracing::trace;

/// Searches installed applications by name and description
pub struct ApplicationProvider {
    descriptor: ProviderDescriptor,
    entries: Vec<ApplicationEntry>,
    matcher: FuzzyMatcher,
    icons: Arc<dyn IconResolver>,
}

impl ApplicationProvider {
    /// Create a provider over `entries`, kept in the given order
    pub fn new(entries: Vec<ApplicationEntry>) -> Self {
        Self {
            descriptor: ProviderDescriptor::new(
                "applications",
                "Applications",
                "Searches installed desktop applications",
            )
            .with_priority(APPLICATIONS_PRIORITY),
            entries,
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

    pub fn entries(&self) -> &[ApplicationEntry] {
        &self.entries
    }

    /// Best of the name and description scores. Positions are kept only for
    /// name matches since they index into the display name.
    fn score_entry(&self, entry: &ApplicationEntry, query: &str) -> MatchScore {
        let by_name = self.matcher.score(&entry.name, query);
        let by_description = entry
            .description
            .as_deref()
            .map(|description| self.matcher.score(description, query))
            .unwrap_or_default();

        if by_description.score > by_name.score {
            MatchScore::fixed(by_description.score)
        } else {
            by_name
        }
    }

    fn item(&self, entry: &ApplicationEntry, score: MatchScore) -> Option<SearchItem> {
        if entry.name.trim().is_empty() || entry.exec.trim().is_empty() {
            trace!("Skipping application entry without name or command: {:?}", entry);
            return None;
        }

        Some(SearchItem {
            id: format!("app:{}", entry.name),
            display_name: entry.name.clone(),
            description: entry.description.clone(),
            icon: entry
                .icon
                .as_deref()
                .and_then(|icon| self.icons.resolve_app_icon(icon)),
            kind: ItemKind::Application,
            invoke: InvokeToken::Command(entry.exec.clone()),
            score: score.score,
            matched_positions: score.matched_positions,
        })
    }
}

impl SearchProvider for ApplicationProvider {
    fn descriptor(&self) -> &ProviderDescriptor {
        &self.descriptor
    }

    fn descriptor_mut(&mut self) -> &mut ProviderDescriptor {
        &mut self.descriptor
    }

    fn search(&self, query: &str) -> Vec<SearchItem> {
        rank_by(&self.entries, query, 0, |entry, query| {
            self.score_entry(entry, query)
        })
        .into_iter()
        .filter_map(|ranked| self.item(&self.entries[ranked.index], ranked.score))
        .collect()
    }

    fn list_all(&self) -> Vec<SearchItem> {
        self.entries
            .iter()
            .filter_map(|entry| self.item(entry, MatchScore::none()))
            .collect()
    }
}
