//! JSON serialization types for tree output

use serde::Serialize;

/// TreeNode for JSON output - builds the walked part of the tree in memory.
///
/// `children` is only present on directories the walker descended into; a
/// directory past the depth limit serializes without it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    File {
        name: String,
    },
    Directory {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        children: Option<Vec<TreeNode>>,
    },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name } => name,
            TreeNode::Directory { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Directory { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_directory_serializes_with_type_tag() {
        let node = TreeNode::Directory {
            name: "src".to_string(),
            children: Some(vec![TreeNode::File {
                name: "lib.rs".to_string(),
            }]),
        };
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({
                "type": "directory",
                "name": "src",
                "children": [{"type": "file", "name": "lib.rs"}]
            })
        );
    }

    #[test]
    fn test_unvisited_directory_has_no_children_key() {
        let node = TreeNode::Directory {
            name: "deep".to_string(),
            children: None,
        };
        let value = serde_json::to_value(&node).unwrap();
        assert!(value.get("children").is_none());
        assert!(node.is_dir());
        assert_eq!(node.name(), "deep");
    }
}
