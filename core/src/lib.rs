//! # Scout Core
//!
//! Core library for Scout - an incremental launcher search engine.
//!
//! This library provides the fuzzy matcher and ranker, the application and
//! file search providers, and the registry that merges their results by
//! provider priority.

// Core modules
pub mod config;
pub mod error;
pub mod index;
pub mod matcher;
pub mod provider;
pub mod registry;

// Re-export commonly used types
pub use config::{ApplicationEntry, FileIndexConfig, Settings};
pub use error::{ConfigError, Error, LaunchError, Result};
pub use index::FileIndex;
pub use matcher::{rank, FuzzyMatcher, MatchScore, RankedMatch, ScanMode};
pub use provider::{
    ApplicationProvider, FileIndexProvider, InvokeToken, ItemKind, SearchItem, SearchProvider,
};
pub use registry::{ProviderRegistry, SearchResults};

/// Current version of the scout-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing with a specific debug mode
///
/// `RUST_LOG` wins when set; otherwise `debug` or `info`. Logs go to stderr
/// so stdout stays machine-readable.
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
