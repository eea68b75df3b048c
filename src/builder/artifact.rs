//! Artifact naming and cache maintenance.
//!
//! An artifact is named after the SHA-256 of the space-joined selection, so a
//! repeated request finds the file it produced last time.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

use crate::constants::TEMPLATE_SUFFIX;

/// Length of a hex-encoded SHA-256 digest.
const KEY_LEN: usize = 64;

/// Cache key for a selection: lowercase hex SHA-256 of `selection.join(" ")`.
///
/// The key is order- and case-sensitive.
#[must_use]
pub fn cache_key(selection: &[String]) -> String {
    let digest = Sha256::digest(selection.join(" ").as_bytes());
    hex::encode(digest)
}

/// Path of the artifact for `selection` inside `cache_dir`.
#[must_use]
pub fn artifact_path(cache_dir: &Path, selection: &[String]) -> PathBuf {
    cache_dir.join(format!("{}{TEMPLATE_SUFFIX}", cache_key(selection)))
}

/// Whether a file name has the shape of an artifact, `<64 hex>.gitignore`.
fn is_artifact_name(file_name: &str) -> bool {
    file_name.strip_suffix(TEMPLATE_SUFFIX).is_some_and(|key| {
        key.len() == KEY_LEN && key.bytes().all(|b| b.is_ascii_hexdigit())
    })
}

/// Removes every artifact from `cache_dir` and returns how many were removed.
///
/// Other files in the directory are left alone. A missing directory counts
/// as already clean.
pub fn clean_artifacts(cache_dir: &Path) -> Result<usize> {
    let entries = match std::fs::read_dir(cache_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to read cache directory: {}", cache_dir.display()));
        }
    };

    let mut removed = 0;
    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to read cache directory: {}", cache_dir.display()))?;
        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        if !is_file || !entry.file_name().to_str().is_some_and(is_artifact_name) {
            continue;
        }

        let path = entry.path();
        std::fs::remove_file(&path)
            .with_context(|| format!("Failed to remove cached artifact: {}", path.display()))?;
        tracing::debug!("Removed cached artifact {}", path.display());
        removed += 1;
    }

    Ok(removed)
}
