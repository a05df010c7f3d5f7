//! Directory listing shared by the text and JSON walks.

use std::path::{Path, PathBuf};

/// One immediate child of a directory.
#[derive(Debug, Clone)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    /// Follows symlinks, so a link to a directory counts as a directory.
    pub is_dir: bool,
}

impl Entry {
    /// Display form: directories carry a trailing `/`.
    pub fn label(&self) -> String {
        if self.is_dir {
            format!("{}/", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// Read and sort the entries of a directory by name.
///
/// Returns `None` when the directory cannot be listed (permissions, a race
/// with deletion, or the path not being a directory at all).
pub fn read_sorted_entries(path: &Path) -> Option<Vec<Entry>> {
    let entries = match std::fs::read_dir(path) {
        Ok(e) => e,
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "cannot list directory");
            return None;
        }
    };

    let mut entries: Vec<_> = entries.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|a| a.file_name());

    Some(
        entries
            .into_iter()
            .map(|entry| {
                let path = entry.path();
                Entry {
                    name: entry.file_name().to_string_lossy().into_owned(),
                    is_dir: path.is_dir(),
                    path,
                }
            })
            .collect(),
    )
}
