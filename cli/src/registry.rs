//! Provider registry construction from loaded settings

use crate::config::resolve_roots;
use anyhow::Result;
use scout_core::config::Settings;
use scout_core::{ApplicationProvider, FileIndexProvider, ProviderRegistry};
use tracing::debug;

/// Create the registry with every built-in provider configured
pub fn create_cli_registry(settings: &Settings) -> Result<ProviderRegistry> {
    let mut registry = ProviderRegistry::new();

    let apps = &settings.applications;
    registry.register(Box::new(
        ApplicationProvider::new(apps.entries.clone())
            .with_priority(apps.priority)
            .with_enabled(apps.enabled),
    ));

    let files = &settings.file_search;
    if files.enabled {
        let roots = resolve_roots(files)?;
        debug!("Indexing files under {:?}", roots);
        registry.register(Box::new(
            FileIndexProvider::new(files.index_config(roots)).with_priority(files.priority),
        ));
    } else {
        debug!("File search disabled, not building an index");
    }

    Ok(registry)
}
