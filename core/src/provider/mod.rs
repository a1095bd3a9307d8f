//! Search provider trait and implementations
//!
//! A provider is a self-contained source of result items with its own
//! ranking. The registry only decides the order in which providers' lists are
//! concatenated.

pub mod applications;
pub mod files;
pub mod icons;
pub mod item;

pub use applications::ApplicationProvider;
pub use files::FileIndexProvider;
pub use icons::{IconResolver, MimeIconResolver};
pub use item::{InvokeToken, ItemKind, SearchItem};

use crate::error::Result;
use serde::Serialize;

/// Identity and merge policy of a provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderDescriptor {
    pub id: String,
    pub display_name: String,
    pub description: String,
    /// Higher is merged first
    pub priority: i32,
    pub enabled: bool,
}

impl ProviderDescriptor {
    /// Descriptor with priority 0, enabled
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            description: description.into(),
            priority: 0,
            enabled: true,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Trait for search providers
///
/// `search` and `list_all` never fail as a whole: an item that cannot be
/// produced is skipped.
pub trait SearchProvider: Send + Sync {
    fn descriptor(&self) -> &ProviderDescriptor;

    fn descriptor_mut(&mut self) -> &mut ProviderDescriptor;

    fn id(&self) -> &str {
        &self.descriptor().id
    }

    fn display_name(&self) -> &str {
        &self.descriptor().display_name
    }

    /// Description for listings; providers may report live state here
    fn description(&self) -> String {
        self.descriptor().description.clone()
    }

    fn priority(&self) -> i32 {
        self.descriptor().priority
    }

    fn is_enabled(&self) -> bool {
        self.descriptor().enabled
    }

    /// Items matching a non-empty query, best first
    fn search(&self, query: &str) -> Vec<SearchItem>;

    /// Items shown for an empty query
    fn list_all(&self) -> Vec<SearchItem>;

    /// Rebuild any cached state
    fn refresh(&mut self) -> Result<()> {
        Ok(())
    }
}
