//! Settings discovery for the CLI

pub mod loader;

pub use loader::{resolve_roots, CliConfigLoader};
