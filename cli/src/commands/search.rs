//! One-shot search command

use crate::output::{print_items, print_json};
use anyhow::Result;
use scout_core::{ProviderRegistry, SearchItem};
use tracing::debug;

/// Run one query and print the merged results
///
/// `limit` caps the printed items; 0 prints everything.
pub fn search_command(
    registry: &ProviderRegistry,
    query: &str,
    json: bool,
    limit: usize,
) -> Result<()> {
    let results = registry.search(query);
    debug!("Query '{}' produced {} results", query, results.len());

    let items = limited(results.items(), limit);
    if json {
        return print_json(items);
    }

    if items.is_empty() {
        println!("No results for '{}'", query);
    } else {
        print_items(items);
    }
    Ok(())
}

fn limited(items: &[SearchItem], limit: usize) -> &[SearchItem] {
    if limit == 0 {
        items
    } else {
        &items[..items.len().min(limit)]
    }
}
