//! Markdown rendering of a text tree

use std::path::Path;

/// Wrap a text tree in a fenced block under a heading naming the root.
pub fn render_markdown(root: &Path, tree: &str) -> String {
    format!("## Directory Tree: {}\n\n```\n{}\n```", root.display(), tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_markdown() {
        let out = render_markdown(Path::new("/work/project"), "a.txt\nsub/\n  b.py");
        assert_eq!(
            out,
            "## Directory Tree: /work/project\n\n```\na.txt\nsub/\n  b.py\n```"
        );
    }

    #[test]
    fn test_render_markdown_empty_tree() {
        let out = render_markdown(Path::new("/empty"), "");
        assert!(out.starts_with("## Directory Tree: /empty"));
        assert!(out.ends_with("```\n\n```"));
    }
}
