//! Result items handed to the UI layer

use serde::Serialize;
use std::path::PathBuf;

/// Kind of a result item, for rendering decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Application,
    File,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Application => "app",
            ItemKind::File => "file",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What activating an item should do; interpreted by a launcher, never by the core
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "target", rename_all = "snake_case")]
pub enum InvokeToken {
    /// Run a shell command line
    Command(String),

    /// Open a path with the desktop's default handler
    Open(PathBuf),
}

impl InvokeToken {
    /// Human-readable target of the action
    pub fn target(&self) -> String {
        match self {
            InvokeToken::Command(command) => command.clone(),
            InvokeToken::Open(path) => path.display().to_string(),
        }
    }
}

/// A single search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchItem {
    /// Stable identifier, unique within one provider
    pub id: String,

    /// Primary text shown to the user
    pub display_name: String,

    /// Secondary text (application comment, full file path)
    pub description: Option<String>,

    /// Resolved icon name or path
    pub icon: Option<String>,

    pub kind: ItemKind,

    pub invoke: InvokeToken,

    /// Score assigned by the producing provider; only comparable within it
    pub score: i64,

    /// Character positions in `display_name` that matched the query
    pub matched_positions: Vec<usize>,
}
