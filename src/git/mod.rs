//! Git operations wrapper
//!
//! The template mirror is an ordinary git working copy managed through the
//! system `git` binary, so whatever credential helpers, proxies and SSH
//! configuration the user already has keep working.
//!
//! Only two operations are needed: cloning the mirror the first time and
//! fast-forwarding it afterwards. [`GitRepo`] wraps both; the process
//! plumbing lives in [`command_builder`].
//!
//! # Examples
//!
//! ```rust,no_run
//! use gitignore_workflow::git::GitRepo;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), gitignore_workflow::core::SyncError> {
//! let timeout = Some(Duration::from_secs(60));
//! let repo = GitRepo::clone("https://github.com/github/gitignore.git", "/tmp/gitignore", timeout).await?;
//! repo.pull(timeout).await?;
//! # Ok(())
//! # }
//! ```

pub mod command_builder;

use std::path::{Path, PathBuf};
use std::time::Duration;

pub use command_builder::{GitCommand, GitCommandOutput, classify_failure};

use crate::core::SyncError;
use crate::utils::platform::get_git_command;

/// A local git working copy.
#[derive(Debug, Clone)]
pub struct GitRepo {
    path: PathBuf,
}

impl GitRepo {
    /// Wraps an existing directory. No validation is performed.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Clones `url` into `target` and returns the new working copy.
    ///
    /// `target` must be missing or empty; git refuses anything else.
    ///
    /// # Errors
    ///
    /// Any [`SyncError`] produced by [`GitCommand::execute`].
    pub async fn clone(
        url: &str,
        target: impl AsRef<Path>,
        timeout: Option<Duration>,
    ) -> Result<Self, SyncError> {
        let target = target.as_ref();
        GitCommand::clone(url, target)
            .with_timeout(timeout)
            .with_context("mirror")
            .execute()
            .await?;
        tracing::debug!(target: "git", "Cloned {} into {}", url, target.display());
        Ok(Self::new(target))
    }

    /// Fast-forwards the working copy to its upstream branch.
    ///
    /// # Errors
    ///
    /// Any [`SyncError`] produced by [`GitCommand::execute`]. A diverged
    /// history shows up as [`SyncError::CommandFailed`].
    pub async fn pull(&self, timeout: Option<Duration>) -> Result<(), SyncError> {
        GitCommand::pull()
            .current_dir(&self.path)
            .with_timeout(timeout)
            .with_context("mirror")
            .execute()
            .await?;
        Ok(())
    }

    /// Returns `true` when the directory holds a `.git` entry.
    ///
    /// `.git` may be a directory or, for worktrees and submodules, a file.
    #[must_use]
    pub fn is_git_repo(&self) -> bool {
        self.path.join(".git").exists()
    }

    /// Root of the working copy.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Checks whether the git executable can be found on `PATH`.
#[must_use]
pub fn is_git_installed() -> bool {
    which::which(get_git_command()).is_ok()
}

/// Returns [`SyncError::GitNotFound`] unless git is installed.
///
/// Checked up front so a missing installation gets its own message rather
/// than a spawn failure in the middle of a sync.
pub fn ensure_git_available() -> Result<(), SyncError> {
    if !is_git_installed() {
        return Err(SyncError::GitNotFound);
    }
    Ok(())
}
