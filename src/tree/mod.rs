//! Directory tree walking logic
//!
//! `TreeWalker` lists a directory recursively down to a depth limit. The same
//! walk is available as indented text (optionally wrapped as Markdown) or as
//! a nested node tree for JSON output.

mod config;
mod json_types;
mod markdown;
mod traversal;
mod walker;

pub use config::{DEFAULT_MAX_DEPTH, TreeFormat, WalkerConfig};
pub use json_types::TreeNode;
pub use markdown::render_markdown;
pub use traversal::{Entry, read_sorted_entries};
pub use walker::TreeWalker;
