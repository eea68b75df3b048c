//! Common test utilities for the workflow integration tests
//!
//! Each [`TestWorkflow`] owns a temporary directory with a local template
//! repository (the remote), a data directory and a cache directory, and
//! runs the binary against them through the launcher's environment
//! variables.

// Not every test module uses every helper
#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use gitignore_workflow::test_utils::{TestGit, create_template_repo, file_url};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Templates every test remote starts with
pub const DEFAULT_TEMPLATES: &[(&str, &str)] = &[
    ("Go", "bin/\n"),
    ("Node", "node_modules/\n"),
    ("Python", "__pycache__/\n"),
    ("Global/macOS", ".DS_Store\n"),
];

/// Isolated workflow environment
pub struct TestWorkflow {
    _temp_dir: TempDir, // Keep alive for RAII cleanup
    remote_dir: PathBuf,
    data_dir: PathBuf,
    cache_dir: PathBuf,
}

impl TestWorkflow {
    /// Create an environment whose remote holds [`DEFAULT_TEMPLATES`]
    pub fn new() -> Result<Self> {
        Self::with_templates(DEFAULT_TEMPLATES)
    }

    /// Create an environment whose remote holds the given templates
    pub fn with_templates(templates: &[(&str, &str)]) -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let remote_dir = create_template_repo(&temp_dir.path().join("remote"), templates)?;
        let data_dir = temp_dir.path().join("data");
        let cache_dir = temp_dir.path().join("cache");

        Ok(Self {
            _temp_dir: temp_dir,
            remote_dir,
            data_dir,
            cache_dir,
        })
    }

    pub fn remote_path(&self) -> &Path {
        &self.remote_dir
    }

    pub fn data_path(&self) -> &Path {
        &self.data_dir
    }

    pub fn cache_path(&self) -> &Path {
        &self.cache_dir
    }

    pub fn mirror_path(&self) -> PathBuf {
        self.data_dir.join("gitignore")
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.data_dir.join("templates.json")
    }

    /// The stored catalog, `None` before the first successful update
    pub fn catalog(&self) -> Result<Option<Vec<String>>> {
        let path = self.catalog_path();
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&std::fs::read_to_string(path)?)?))
    }

    /// A command for the workflow binary, wired to this environment
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("gitignore-workflow").unwrap();
        cmd.env("alfred_workflow_data", &self.data_dir)
            .env("alfred_workflow_cache", &self.cache_dir)
            .env("GITIGNORE_WORKFLOW_REMOTE", file_url(&self.remote_dir))
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Run `update` and require it to succeed
    pub fn update(&self) {
        self.command().arg("update").assert().success();
    }

    /// Commit a new or changed template to the remote
    pub fn commit_template(&self, name: &str, content: &str) -> Result<()> {
        std::fs::write(self.remote_dir.join(format!("{name}.gitignore")), content)?;
        let git = TestGit::new(&self.remote_dir);
        git.add_all()?;
        git.commit(&format!("Update {name}"))?;
        Ok(())
    }
}
