//! Provider listing command

use anyhow::Result;
use colored::Colorize;
use scout_core::ProviderRegistry;

/// Show registered providers in merge order
pub fn providers_command(registry: &ProviderRegistry) -> Result<()> {
    if registry.is_empty() {
        println!("No providers registered");
        return Ok(());
    }

    for provider in registry.providers() {
        let state = if provider.is_enabled() {
            "enabled".green()
        } else {
            "disabled".red()
        };
        println!(
            "{} ({}) priority {} {}",
            provider.display_name().bold(),
            provider.id(),
            provider.priority(),
            state
        );
        println!("   {}", provider.description());
    }

    Ok(())
}
