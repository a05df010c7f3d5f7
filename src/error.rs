//! Error types shared by the walkers and outliners

use std::io;

use serde_json::{Value, json};
use thiserror::Error;

use crate::validate::PathRejection;

/// Errors produced by the exploration core.
///
/// None of these ever reach the MCP client as a protocol error: the
/// operations in [`crate::tools`] turn every variant into an
/// `{"error": message}` value.
#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("{0}")]
    InvalidPath(#[from] PathRejection),

    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("invalid syntax (line {line})")]
    Parse { line: usize },

    #[error("failed to load Python grammar: {0}")]
    Grammar(String),

    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExplorerError>;

impl ExplorerError {
    /// The structured error value returned in place of a result.
    pub fn to_value(&self) -> Value {
        json!({ "error": self.to_string() })
    }
}
