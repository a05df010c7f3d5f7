//! The exploration operations as plain functions
//!
//! Each operation returns a JSON value and never fails: rejected paths,
//! unreadable files and any other error come back as `{"error": message}`
//! in place of the result they replace. Batch results are keyed by the
//! caller's path strings in input order.

use serde_json::{Map, Value, json};

use crate::error::Result;
use crate::outline::{HeadingOutliner, PythonOutliner, outline_paths};
use crate::strip::strip;
use crate::tree::{TreeFormat, TreeWalker, WalkerConfig, render_markdown};
use crate::validate::check_path;

/// List the tree under `root_path`, descending `max_depth` levels.
///
/// Text and Markdown output come back as a JSON string, JSON output as an
/// array of nodes.
pub fn dir_tree(root_path: &str, max_depth: i64, format: TreeFormat) -> Value {
    match try_dir_tree(root_path, max_depth, format) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(path = %root_path, error = %err, "dir_tree failed");
            err.to_value()
        }
    }
}

fn try_dir_tree(root_path: &str, max_depth: i64, format: TreeFormat) -> Result<Value> {
    let root = check_path(root_path)?;
    let walker = TreeWalker::new(WalkerConfig::with_max_depth(max_depth));
    tracing::debug!(path = %root.display(), max_depth, ?format, "walking directory tree");

    let value = match format {
        TreeFormat::Text => Value::String(walker.walk_text(root)),
        TreeFormat::Markdown => Value::String(render_markdown(root, &walker.walk_text(root))),
        TreeFormat::Json => serde_json::to_value(walker.walk_nodes(root))?,
    };
    Ok(value)
}

/// Outline each Python file; empty fields are stripped from every outline.
pub fn python_outline(paths: &[String]) -> Value {
    let mut result = Map::new();
    for (path, outline) in outline_paths(&PythonOutliner::new(), paths) {
        let value = outline
            .and_then(|outline| Ok(strip(&serde_json::to_value(outline)?)))
            .unwrap_or_else(|err| err.to_value());
        result.insert(path, value);
    }
    Value::Object(result)
}

/// List the headings of each Markdown file. A failed file maps to a
/// one-element list holding its error.
pub fn markdown_outline(paths: &[String]) -> Value {
    let mut result = Map::new();
    for (path, headings) in outline_paths(&HeadingOutliner::new(), paths) {
        let value = headings
            .and_then(|headings| Ok(serde_json::to_value(headings)?))
            .unwrap_or_else(|err| json!([err.to_value()]));
        result.insert(path, value);
    }
    Value::Object(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn path_str(path: &Path) -> String {
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_dir_tree_text() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/b.py"), "").unwrap();

        let out = dir_tree(&path_str(dir.path()), 1, TreeFormat::Text);
        assert_eq!(out, json!("a.txt\nsub/\n  b.py"));
    }

    #[test]
    fn test_dir_tree_json() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/b.py"), "").unwrap();

        let out = dir_tree(&path_str(dir.path()), 0, TreeFormat::Json);
        assert_eq!(out, json!([{"type": "directory", "name": "sub"}]));
    }

    #[test]
    fn test_dir_tree_markdown() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();

        let out = dir_tree(&path_str(dir.path()), 1, TreeFormat::Markdown);
        let text = out.as_str().unwrap();
        assert!(text.starts_with("## Directory Tree: "));
        assert!(text.contains("```\na.txt\n```"));
    }

    #[test]
    fn test_dir_tree_invalid_path() {
        let out = dir_tree("relative/dir", 1, TreeFormat::Text);
        assert_eq!(out, json!({"error": "The path is not absolute."}));
    }

    #[test]
    fn test_python_outline_strips_empty_fields() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("mod.py");
        fs::write(&file, "def f():\n    pass\n").unwrap();

        let out = python_outline(&[path_str(&file)]);
        assert_eq!(
            out,
            json!({ path_str(&file): {"functions": [{"name": "f", "line": 1}]} })
        );
    }

    #[test]
    fn test_python_outline_empty_file_is_empty_object() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("empty.py");
        fs::write(&file, "").unwrap();

        let out = python_outline(&[path_str(&file)]);
        assert_eq!(out, json!({ path_str(&file): {} }));
    }

    #[test]
    fn test_python_outline_syntax_error() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("bad.py");
        fs::write(&file, "class :\n").unwrap();

        let out = python_outline(&[path_str(&file)]);
        let message = out[path_str(&file)]["error"].as_str().unwrap();
        assert!(message.starts_with("invalid syntax"), "{message}");
    }

    #[test]
    fn test_markdown_outline_error_is_a_list() {
        let out = markdown_outline(&["/no/such/file.md".to_string()]);
        assert_eq!(
            out,
            json!({"/no/such/file.md": [{"error": "The path does not exist on disk."}]})
        );
    }

    #[test]
    fn test_markdown_outline_directory_is_per_file_error() {
        let dir = TempDir::new().unwrap();
        let out = markdown_outline(&[path_str(dir.path())]);
        let entry = &out[path_str(dir.path())];
        assert_eq!(entry.as_array().unwrap().len(), 1);
        assert!(entry[0]["error"].is_string());
    }
}
