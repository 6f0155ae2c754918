//! Thin wrapper around the `git` executable.
//!
//! All repository data moves through the stock `git` binary; this module
//! only shells out and maps failures onto [`GitError`]. The [`Vcs`] trait is
//! the seam the orchestrator uses, so tests can substitute an in-memory
//! implementation.

mod error;

pub use error::GitError;

use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Version-control operations required by the migration.
#[async_trait]
pub trait Vcs: Send + Sync {
    /// Clones `url` into `dest`, creating the directory.
    async fn clone_repository(&self, url: &str, dest: &Path) -> Result<(), GitError>;

    /// Fetches and merges the latest changes in an existing clone.
    async fn pull(&self, repo: &Path) -> Result<(), GitError>;

    /// Points `name` at `url`, replacing the remote if it already exists.
    async fn set_remote(&self, repo: &Path, name: &str, url: &str) -> Result<(), GitError>;

    /// Pushes all refs to the named remote.
    async fn push_all(&self, repo: &Path, remote: &str) -> Result<(), GitError>;
}

/// [`Vcs`] implementation backed by the system `git` binary.
#[derive(Debug, Default)]
pub struct GitCli;

#[async_trait]
impl Vcs for GitCli {
    async fn clone_repository(&self, url: &str, dest: &Path) -> Result<(), GitError> {
        debug!(dest = %dest.display(), "Cloning repository");

        let output = Command::new("git")
            .arg("clone")
            .arg(url)
            .arg(dest)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| GitError::CloneFailed {
                message: format!("failed to execute git clone: {e}"),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitError::CloneFailed {
                message: stderr.trim().to_string(),
            });
        }

        Ok(())
    }

    async fn pull(&self, repo: &Path) -> Result<(), GitError> {
        debug!(repo = %repo.display(), "Pulling latest changes");

        run_git(repo, &["pull"])
            .await
            .map_err(|message| GitError::PullFailed { message })
    }

    async fn set_remote(&self, repo: &Path, name: &str, url: &str) -> Result<(), GitError> {
        // Overwrite semantics: a leftover remote from a previous invocation
        // must not make the push go to a stale URL.
        let _ = run_git(repo, &["remote", "rm", name]).await;

        run_git(repo, &["remote", "add", name, url])
            .await
            .map_err(|message| GitError::CommandFailed {
                command: format!("remote add {name}"),
                message,
            })
    }

    async fn push_all(&self, repo: &Path, remote: &str) -> Result<(), GitError> {
        debug!(repo = %repo.display(), remote, "Pushing all refs");

        run_git(repo, &["push", "--all", remote])
            .await
            .map_err(|message| GitError::PushFailed { message })
    }
}

/// Runs a git command in `cwd`, returning stderr as the error message.
async fn run_git(cwd: &Path, args: &[&str]) -> Result<(), String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| format!("failed to execute git {}: {e}", args.join(" ")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(stderr.trim().to_string());
    }

    Ok(())
}
