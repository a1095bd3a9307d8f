//! Interactive search loop

use crate::launcher::Launcher;
use crate::output::format_item;
use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use scout_core::ProviderRegistry;
use tracing::warn;

/// Number of results offered per query
const MAX_CHOICES: usize = 15;

/// Prompt for queries until an empty line, offering results to launch
pub fn interactive_command(registry: &ProviderRegistry, launcher: &dyn Launcher) -> Result<()> {
    let theme = ColorfulTheme::default();

    loop {
        let query: String = Input::with_theme(&theme)
            .with_prompt("Search (empty to quit)")
            .allow_empty(true)
            .interact_text()?;

        let query = query.trim();
        if query.is_empty() {
            return Ok(());
        }

        let results = registry.search(query);
        if results.is_empty() {
            println!("No results for '{}'", query);
            continue;
        }

        let shown = &results.items()[..results.len().min(MAX_CHOICES)];
        let mut choices: Vec<String> = shown
            .iter()
            .enumerate()
            .map(|(index, item)| format_item(index, item))
            .collect();
        choices.push("New search".to_string());

        let selection = Select::with_theme(&theme)
            .with_prompt("Launch")
            .items(&choices)
            .default(0)
            .interact_opt()?;

        if let Some(item) = selection.and_then(|index| shown.get(index)) {
            match launcher.launch(&item.invoke) {
                Ok(()) => println!("Launched {}", item.display_name),
                Err(e) => warn!("{}", e),
            }
        }
    }
}
