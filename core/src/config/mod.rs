//! Configuration for scout core
//!
//! Only exports pure data types. All loading logic is in CLI layer.

pub mod index_config;
pub mod settings;

pub use index_config::FileIndexConfig;
pub use settings::{ApplicationEntry, ApplicationSettings, FileSearchSettings, Settings};
