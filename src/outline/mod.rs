//! File outliners
//!
//! An outliner reads one file and summarizes its structure. Two are
//! provided:
//!
//! - [`PythonOutliner`]: docstrings, imports, classes with their methods and
//!   top-level functions, via tree-sitter
//! - [`HeadingOutliner`]: Markdown headings with their level and line
//!
//! [`outline_paths`] runs an outliner over a batch of caller-supplied paths.
//! Every path is validated on its own and processed in input order; an
//! invalid or unreadable path produces an error for that path only.

pub mod docstring;
pub mod markdown;
pub mod python;
pub mod types;

use std::path::Path;

use crate::error::{ExplorerError, Result};
use crate::validate::check_path;

pub use markdown::{HeadingOutliner, extract_headings};
pub use python::{PythonOutliner, outline_source};
pub use types::{ClassOutline, FunctionOutline, Heading, Import, PythonOutline};

/// Common interface of the file outliners.
pub trait Outliner {
    /// The outline produced for one file.
    type Output;

    /// Outline a file that has already passed path validation.
    fn outline_file(&self, path: &Path) -> Result<Self::Output>;

    /// Short name used in logs (e.g., "python", "markdown").
    fn name(&self) -> &'static str;
}

/// Validate and outline each path, keeping input order.
pub fn outline_paths<O: Outliner>(
    outliner: &O,
    paths: &[String],
) -> Vec<(String, Result<O::Output>)> {
    paths
        .iter()
        .map(|raw| {
            let result = check_path(raw)
                .map_err(ExplorerError::from)
                .and_then(|path| outliner.outline_file(path));
            match &result {
                Ok(_) => tracing::debug!(outliner = outliner.name(), path = %raw, "outlined file"),
                Err(err) => {
                    tracing::warn!(outliner = outliner.name(), path = %raw, error = %err, "outline failed")
                }
            }
            (raw.clone(), result)
        })
        .collect()
}
