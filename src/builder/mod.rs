//! Merges selected templates into a single `.gitignore` artifact.
//!
//! Each template found in the mirror contributes a header naming the file,
//! its raw bytes, and a blank line:
//!
//! ```text
//! ### Node.gitignore
//!
//! node_modules/
//!
//!
//! ```
//!
//! Artifacts are cached under a name derived from the selection (see
//! [`artifact`]). An existing artifact is returned as is and never
//! rewritten; the fetcher clears the cache after every successful sync.

pub mod artifact;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub use artifact::{artifact_path, cache_key, clean_artifacts};

use crate::catalog::template_name;
use crate::config::WorkflowConfig;
use crate::constants::TEMPLATE_SUFFIX;
use crate::core::BuildError;
use crate::utils::fs::{atomic_write, find_files_with_suffix};

/// A built (or previously built) artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Location of the merged file
    pub path: PathBuf,
    /// `true` when the file already existed and nothing was written
    pub cached: bool,
}

/// Builds artifacts from the template mirror.
#[derive(Debug, Clone)]
pub struct Builder {
    mirror_dir: PathBuf,
    cache_dir: PathBuf,
}

impl Builder {
    pub fn new(config: &WorkflowConfig) -> Self {
        Self {
            mirror_dir: config.mirror_dir.clone(),
            cache_dir: config.cache_dir.clone(),
        }
    }

    /// Where the artifact for `selection` lives, whether or not it exists.
    #[must_use]
    pub fn artifact_path(&self, selection: &[String]) -> PathBuf {
        artifact_path(&self.cache_dir, selection)
    }

    /// Builds the artifact for `selection` and returns its path.
    ///
    /// See [`Self::build_artifact`].
    pub fn build(&self, selection: &[String]) -> Result<PathBuf, BuildError> {
        self.build_artifact(selection).map(|artifact| artifact.path)
    }

    /// Builds the artifact for `selection`, reporting whether it was cached.
    ///
    /// Templates are concatenated in selection order, duplicates included.
    /// Names are matched case-insensitively against file names in the
    /// mirror; unknown names are skipped with a warning. A selection where
    /// nothing matched still yields an (empty) artifact.
    ///
    /// # Errors
    ///
    /// - [`BuildError::EmptySelection`] for an empty selection, before any I/O
    /// - [`BuildError::MirrorMissing`] when no sync has created the mirror
    /// - [`BuildError::Scan`], [`BuildError::Read`], [`BuildError::Write`] for I/O failures
    pub fn build_artifact(&self, selection: &[String]) -> Result<Artifact, BuildError> {
        if selection.is_empty() {
            return Err(BuildError::EmptySelection);
        }
        if !self.mirror_dir.is_dir() {
            return Err(BuildError::MirrorMissing {
                path: self.mirror_dir.clone(),
            });
        }

        let path = self.artifact_path(selection);
        if path.exists() {
            tracing::debug!("Using cached artifact {}", path.display());
            return Ok(Artifact {
                path,
                cached: true,
            });
        }

        let index = self.index_mirror()?;
        let mut content = Vec::new();
        let mut matched = 0usize;
        for name in selection {
            let key = format!("{name}{TEMPLATE_SUFFIX}").to_lowercase();
            let Some(template) = index.get(&key) else {
                tracing::warn!("Template '{}' not found in {}", name, self.mirror_dir.display());
                continue;
            };
            append_template(&mut content, template)?;
            matched += 1;
        }

        if matched == 0 {
            tracing::warn!("None of '{}' matched a template; the artifact is empty", selection.join(" "));
        }

        atomic_write(&path, &content).map_err(|e| BuildError::Write {
            path: path.clone(),
            reason: format!("{e:#}"),
        })?;
        tracing::info!(
            "Built {} from {} of {} selected templates",
            path.display(),
            matched,
            selection.len()
        );

        Ok(Artifact {
            path,
            cached: false,
        })
    }

    /// Maps each lowercased template file name to its path.
    ///
    /// The walk is sorted, so when a name occurs in several directories the
    /// first one in walk order wins.
    fn index_mirror(&self) -> Result<HashMap<String, PathBuf>, BuildError> {
        let files = find_files_with_suffix(&self.mirror_dir, TEMPLATE_SUFFIX).map_err(|e| {
            BuildError::Scan {
                path: self.mirror_dir.clone(),
                reason: format!("{e:#}"),
            }
        })?;

        let mut index = HashMap::new();
        for path in files {
            let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            if template_name(file_name).is_none() {
                continue;
            }
            index.entry(file_name.to_lowercase()).or_insert(path);
        }
        Ok(index)
    }
}

/// Appends `### <file name>\n\n`, the file's bytes and `\n\n`.
fn append_template(content: &mut Vec<u8>, template: &Path) -> Result<(), BuildError> {
    let bytes = std::fs::read(template).map_err(|source| BuildError::Read {
        path: template.to_path_buf(),
        source,
    })?;
    let file_name = template.file_name().map(|name| name.to_string_lossy()).unwrap_or_default();

    content.extend_from_slice(format!("### {file_name}\n\n").as_bytes());
    content.extend_from_slice(&bytes);
    content.extend_from_slice(b"\n\n");
    Ok(())
}
