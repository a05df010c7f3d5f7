//! TreeWalker - depth-limited recursive directory listing

use std::path::Path;

use super::config::WalkerConfig;
use super::json_types::TreeNode;
use super::traversal::read_sorted_entries;

/// Tree walker producing either indented text lines or a JSON node tree.
///
/// Both walks visit entries in the same order: sorted by name within each
/// directory, depth-first, parents before their children.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk `root` and return the indented text tree, trimmed.
    pub fn walk_text(&self, root: &Path) -> String {
        let lines = self.walk_lines(root, self.config.max_depth, "");
        lines.join("\n").trim().to_string()
    }

    /// Walk `root` and return its entries as JSON nodes.
    pub fn walk_nodes(&self, root: &Path) -> Vec<TreeNode> {
        self.walk_node_list(root, self.config.max_depth)
    }

    fn walk_lines(&self, path: &Path, depth: i64, prefix: &str) -> Vec<String> {
        if depth < 0 {
            return Vec::new();
        }
        let Some(entries) = read_sorted_entries(path) else {
            return Vec::new();
        };

        let mut lines = Vec::with_capacity(entries.len());
        for entry in entries {
            lines.push(format!("{}{}", prefix, entry.label()));
            if entry.is_dir && depth > 0 {
                let child_prefix = format!("{}{}", prefix, self.config.indent);
                lines.extend(self.walk_lines(&entry.path, depth - 1, &child_prefix));
            }
        }
        lines
    }

    fn walk_node_list(&self, path: &Path, depth: i64) -> Vec<TreeNode> {
        if depth < 0 {
            return Vec::new();
        }
        let Some(entries) = read_sorted_entries(path) else {
            return Vec::new();
        };

        entries
            .into_iter()
            .map(|entry| {
                if !entry.is_dir {
                    return TreeNode::File { name: entry.name };
                }
                let children = (depth > 0).then(|| self.walk_node_list(&entry.path, depth - 1));
                TreeNode::Directory {
                    name: entry.name,
                    children,
                }
            })
            .collect()
    }
}
