//! Test harness for project-explorer integration tests

#![allow(dead_code)]

use std::process::Command;

pub use project_explorer::test_utils::TestTree;

/// Run the binary with `args` and the given environment overrides.
pub fn run_explorer(args: &[&str], envs: &[(&str, &str)]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_project-explorer");
    let output = Command::new(binary)
        .args(args)
        .envs(envs.iter().copied())
        .output()
        .expect("Failed to run project-explorer");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let tree = TestTree::new();
        assert!(tree.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let tree = TestTree::new();
        let file_path = tree.add_file("pkg/mod.py", "pass\n");
        assert!(file_path.exists());
    }
}
