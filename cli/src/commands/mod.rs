//! CLI command implementations

pub mod interactive;
pub mod open;
pub mod providers;
pub mod search;

pub use interactive::interactive_command;
pub use open::{open_command, Selection};
pub use providers::providers_command;
pub use search::search_command;
