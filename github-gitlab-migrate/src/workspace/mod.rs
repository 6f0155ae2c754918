//! Scoped temporary directory tree for a migration run.
//!
//! The workspace owns one temporary directory with a `clones/` area for
//! local repository clones and a `scratch/` area for transient artifacts.
//! The whole tree is removed when the workspace is dropped, on success and
//! error paths alike.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Ephemeral filesystem root used by a single migration run.
#[derive(Debug)]
pub struct Workspace {
    root: TempDir,
    clones: PathBuf,
    scratch: PathBuf,
}

impl Workspace {
    /// Allocates a fresh workspace with `clones/` and `scratch/` subdirectories.
    ///
    /// # Errors
    ///
    /// Returns [`io::Error`] when the temporary tree cannot be created.
    pub fn new() -> Result<Self, io::Error> {
        let root = TempDir::new()?;
        let clones = root.path().join("clones");
        let scratch = root.path().join("scratch");
        fs::create_dir(&clones)?;
        fs::create_dir(&scratch)?;
        Ok(Self {
            root,
            clones,
            scratch,
        })
    }

    /// Returns the clone area root.
    pub fn clone_dir(&self) -> &Path {
        &self.clones
    }

    /// Returns the scratch area root.
    pub fn scratch_dir(&self) -> &Path {
        &self.scratch
    }

    /// Returns the local clone path for a repository name.
    pub fn clone_path(&self, repo_name: &str) -> PathBuf {
        self.clones.join(repo_name)
    }

    /// Returns the local clone path for a repository's wiki.
    pub fn wiki_path(&self, repo_name: &str) -> PathBuf {
        self.root.path().join(format!("{repo_name}.wiki"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_clone_and_scratch_areas() {
        let workspace = Workspace::new().unwrap();
        assert!(workspace.clone_dir().is_dir());
        assert!(workspace.scratch_dir().is_dir());
        assert_eq!(
            workspace.clone_path("demo"),
            workspace.clone_dir().join("demo")
        );
    }

    #[test]
    fn removes_tree_on_drop() {
        let workspace = Workspace::new().unwrap();
        let root = workspace.clone_dir().parent().unwrap().to_path_buf();
        drop(workspace);
        assert!(!root.exists());
    }
}
