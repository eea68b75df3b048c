//! Optional TOML settings file.
//!
//! Every key is optional; a missing key falls through to the next layer.
//!
//! ```toml
//! remote_url = "https://github.com/github/gitignore.git"
//! mirror_dir = "~/Library/Application Support/gitignore-workflow/gitignore"
//! cache_dir = "$TMPDIR/gitignore-workflow"
//! git_timeout_secs = 120
//! open_artifacts = true
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::ConfigError;
use crate::utils::fs::safe_write;

/// Contents of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowSettings {
    /// Remote template repository
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_url: Option<String>,

    /// Mirror location; `~` and `$VAR` are expanded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mirror_dir: Option<String>,

    /// Artifact cache location; `~` and `$VAR` are expanded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<String>,

    /// Git timeout in seconds, `0` disables the timeout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_timeout_secs: Option<u64>,

    /// Whether `build` opens the artifact
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_artifacts: Option<bool>,
}

impl WorkflowSettings {
    /// Reads and parses a settings file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Like [`Self::load_from`], but a missing file yields `Ok(None)`.
    pub fn load_optional(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            tracing::debug!("No settings file at {}", path.display());
            return Ok(None);
        }
        Self::load_from(path).map(Some)
    }

    /// Writes the settings as TOML.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize settings")?;
        safe_write(path, &content)
            .with_context(|| format!("Failed to write settings to {}", path.display()))
    }
}
