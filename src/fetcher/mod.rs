//! Synchronizes the template mirror and rebuilds the catalog.
//!
//! A sync is clone-or-pull followed by a full rescan of the mirror. The new
//! catalog replaces the stored one only after every step succeeded, so a
//! failed sync leaves the previous catalog in place.
//!
//! A first clone runs in a staging directory next to the mirror and is
//! renamed into place once git exits successfully. A clone that fails or
//! times out therefore never leaves a partial `.git` at the mirror path.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::builder::clean_artifacts;
use crate::catalog::{Catalog, DataStore};
use crate::config::WorkflowConfig;
use crate::core::SyncError;
use crate::git::{GitRepo, ensure_git_available};
use crate::utils::fs::{ensure_dir, is_empty_dir};

/// Prefix of the staging directories used by first clones.
const STAGING_PREFIX: &str = ".gitignore-clone-";

/// Keeps the local mirror in step with the remote template repository.
#[derive(Debug, Clone)]
pub struct Fetcher {
    remote_url: String,
    mirror_dir: PathBuf,
    cache_dir: PathBuf,
    git_timeout: Option<Duration>,
    store: DataStore,
}

impl Fetcher {
    pub fn new(config: &WorkflowConfig) -> Self {
        Self {
            remote_url: config.remote_url.clone(),
            mirror_dir: config.mirror_dir.clone(),
            cache_dir: config.cache_dir.clone(),
            git_timeout: config.git_timeout,
            store: config.store(),
        }
    }

    /// Clones or pulls the mirror, then stores and returns the new catalog.
    ///
    /// - Missing or empty mirror directory: `git clone`
    /// - Existing working copy: `git pull --ff-only`
    /// - Anything else at the mirror path: [`SyncError::MirrorInvalid`]
    ///
    /// Cached artifacts are removed afterwards, since they may hold template
    /// contents that the pull just changed.
    ///
    /// # Errors
    ///
    /// Any [`SyncError`]. Nothing is persisted when an error is returned.
    pub async fn sync(&self) -> Result<Catalog, SyncError> {
        ensure_git_available()?;

        let repo = GitRepo::new(&self.mirror_dir);
        if repo.is_git_repo() {
            tracing::info!("Pulling templates into {}", self.mirror_dir.display());
            repo.pull(self.git_timeout).await?;
        } else if self.mirror_is_vacant()? {
            tracing::info!("Cloning {} into {}", self.remote_url, self.mirror_dir.display());
            self.clone_mirror().await?;
        } else {
            return Err(SyncError::MirrorInvalid {
                path: self.mirror_dir.clone(),
            });
        }

        let catalog = Catalog::scan(&self.mirror_dir).map_err(|e| SyncError::Scan {
            path: self.mirror_dir.clone(),
            reason: format!("{e:#}"),
        })?;
        catalog.save(&self.store).map_err(|e| SyncError::Storage {
            reason: format!("{e:#}"),
        })?;
        tracing::info!("Stored catalog with {} templates", catalog.len());

        match clean_artifacts(&self.cache_dir) {
            Ok(0) => {}
            Ok(removed) => tracing::debug!("Removed {} stale artifacts", removed),
            Err(e) => tracing::warn!("Could not clear cached artifacts: {e:#}"),
        }

        Ok(catalog)
    }

    /// Clones into a sibling staging directory, then renames it to the
    /// mirror path. The staging directory is removed on every failure.
    async fn clone_mirror(&self) -> Result<(), SyncError> {
        let stage_error = |reason: String| SyncError::Stage {
            path: self.mirror_dir.clone(),
            reason,
        };

        let parent = self
            .mirror_dir
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        ensure_dir(parent).map_err(|e| stage_error(format!("{e:#}")))?;
        let staging = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir_in(parent)
            .map_err(|e| stage_error(e.to_string()))?;

        GitRepo::clone(&self.remote_url, staging.path(), self.git_timeout).await?;

        if self.mirror_dir.is_dir() {
            // Only an empty directory reaches this point
            std::fs::remove_dir(&self.mirror_dir).map_err(|e| stage_error(e.to_string()))?;
        }
        std::fs::rename(staging.path(), &self.mirror_dir).map_err(|e| stage_error(e.to_string()))?;
        tracing::debug!(target: "git", "Moved staged clone into {}", self.mirror_dir.display());
        Ok(())
    }

    /// `true` when the mirror path is free for a fresh clone.
    fn mirror_is_vacant(&self) -> Result<bool, SyncError> {
        if !self.mirror_dir.exists() {
            return Ok(true);
        }
        is_empty_dir(&self.mirror_dir).map_err(|e| SyncError::Scan {
            path: self.mirror_dir.clone(),
            reason: format!("{e:#}"),
        })
    }
}
