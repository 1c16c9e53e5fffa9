//! Scratch directory trees for unit tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use crate::discovery::CONFIG_FILENAME;

/// A temporary directory tree, removed on drop.
pub struct Tree(TempDir);

impl Tree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self(tempfile::tempdir().unwrap())
    }

    /// Root of the tree.
    pub fn path(&self) -> &Path {
        self.0.path()
    }

    /// Creates a directory and its parents.
    pub fn dir(&self, rel_path: &str) -> PathBuf {
        let path = self.path().join(rel_path);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Creates an empty corpus file (`[]`).
    pub fn corpus(&self, rel_path: &str) -> PathBuf {
        let path = self.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, "[]").unwrap();
        path
    }

    /// Writes `.koine.toml` into a directory; `""` is the root.
    pub fn config(&self, rel_dir: &str, content: &str) -> PathBuf {
        let path = self.dir(rel_dir).join(CONFIG_FILENAME);
        fs::write(&path, content).unwrap();
        path
    }
}
