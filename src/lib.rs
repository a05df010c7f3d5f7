//! Project Explorer - An MCP server for read-only exploration of a project
//! on disk: directory trees, Python outlines and Markdown outlines

pub mod config;
pub mod error;
pub mod logging;
pub mod outline;
pub mod server;
pub mod string_utils;
pub mod strip;
pub mod tools;
pub mod tree;
pub mod validate;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{Cli, LogFormat, LoggingSettings, Settings, Tool, ToolSet};
pub use error::{ExplorerError, Result};
pub use outline::{
    HeadingOutliner, Outliner, PythonOutline, PythonOutliner, extract_headings, outline_source,
};
pub use server::ProjectExplorer;
pub use strip::strip;
pub use tree::{TreeFormat, TreeNode, TreeWalker, WalkerConfig};
pub use validate::{PathCheck, PathRejection, validate};
