//! Configuration types for the tree walker

use rmcp::schemars;
use serde::{Deserialize, Serialize};

/// Depth used when a caller does not ask for one.
pub const DEFAULT_MAX_DEPTH: i64 = 1;

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// How many directory levels below the root to descend.
    /// 0 lists only the root's entries; a negative depth lists nothing.
    pub max_depth: i64,
    /// Indentation added per nesting level.
    pub indent: &'static str,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            indent: "  ",
        }
    }
}

impl WalkerConfig {
    pub fn with_max_depth(max_depth: i64) -> Self {
        Self {
            max_depth,
            ..Default::default()
        }
    }
}

/// Rendering of a directory tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TreeFormat {
    /// Indented plain text, one entry per line
    #[default]
    Text,
    /// Nested objects with `name`, `type` and `children`
    Json,
    /// The text tree inside a fenced block under a heading
    Markdown,
}
