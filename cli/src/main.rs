//! # scout CLI
//!
//! Command-line front end for Scout - incremental search over applications
//! and files.
//!
//! ## Usage
//!
//! - `scout` - Start interactive mode
//! - `scout search <query>` - Print merged results for one query
//! - `scout providers` - Show registered providers
//! - `scout open <query>` - Launch a result
//!
//! The registry is built once from the loaded settings and handed to each
//! command by reference.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod launcher;
mod output;
mod registry;

use commands::{interactive_command, open_command, providers_command, search_command, Selection};
use config::CliConfigLoader;
use launcher::DetachedLauncher;
use registry::create_cli_registry;

/// scout - Search applications and files from the terminal
#[derive(Parser)]
#[command(name = "scout")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Incremental launcher search over applications and files")]
#[command(long_about = None)]
struct Cli {
    /// Settings file path
    #[arg(short, long, env = "SCOUT_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print results for a query
    Search {
        query: String,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Maximum number of results to print (0 for all)
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },

    /// Show registered providers
    Providers,

    /// Launch a result for a query
    Open {
        query: String,

        /// Position of the result to launch
        #[arg(short, long, default_value_t = 0)]
        index: usize,

        /// Id of the result to launch, as printed by `search --json`
        #[arg(long, conflicts_with = "index")]
        id: Option<String>,
    },
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> CliConfigLoader {
    let mut loader = CliConfigLoader::new();

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    loader
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    scout_core::init_tracing_with_debug(cli.verbose);

    let settings = build_config_loader(&cli).load()?;
    let registry = create_cli_registry(&settings)?;
    let launcher = DetachedLauncher::default();

    match cli.command {
        Some(Commands::Search { query, json, limit }) => {
            search_command(&registry, &query, json, limit)
        }
        Some(Commands::Providers) => providers_command(&registry),
        Some(Commands::Open { query, index, id }) => {
            let selection = match id {
                Some(id) => Selection::Id(id),
                None => Selection::Index(index),
            };
            open_command(&registry, &launcher, &query, &selection)
        }
        None => interactive_command(&registry, &launcher),
    }
}
