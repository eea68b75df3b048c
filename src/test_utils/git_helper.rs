//! Git test helper utilities
//!
//! Provides a small synchronous wrapper around the git commands that tests
//! need to build local template repositories.

use anyhow::{Context, Result, bail};
use std::path::PathBuf;
use std::process::Command;

/// Git command runner for tests
///
/// Use this instead of raw `std::process::Command` for git operations in
/// tests, so failures report git's stderr.
pub struct TestGit {
    repo_path: PathBuf,
}

impl TestGit {
    fn run_git_command(&self, args: &[&str], action: &str) -> Result<std::process::Output> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_path)
            .output()
            .with_context(|| action.to_string())?;

        if !output.status.success() {
            bail!("{} failed: {}", action, String::from_utf8_lossy(&output.stderr));
        }

        Ok(output)
    }

    /// Create a new TestGit instance for the given repository path
    pub fn new(repo_path: impl Into<PathBuf>) -> Self {
        Self {
            repo_path: repo_path.into(),
        }
    }

    /// Initialize a new git repository
    pub fn init(&self) -> Result<()> {
        self.run_git_command(&["init", "--quiet"], "Failed to initialize git repository")?;
        Ok(())
    }

    /// Configure git user for tests
    pub fn config_user(&self) -> Result<()> {
        self.run_git_command(
            &["config", "user.email", "test@gitignore-workflow.example"],
            "Failed to configure git user email",
        )?;
        self.run_git_command(
            &["config", "user.name", "Test User"],
            "Failed to configure git user name",
        )?;
        self.run_git_command(
            &["config", "commit.gpgsign", "false"],
            "Failed to disable commit signing",
        )?;
        Ok(())
    }

    /// Add all files to staging
    pub fn add_all(&self) -> Result<()> {
        self.run_git_command(&["add", "--all"], "Failed to add files to git")?;
        Ok(())
    }

    /// Create a commit with the given message
    pub fn commit(&self, message: &str) -> Result<()> {
        self.run_git_command(&["commit", "--quiet", "-m", message], "Failed to create git commit")?;
        Ok(())
    }

    /// Get current commit SHA
    pub fn rev_parse_head(&self) -> Result<String> {
        let output =
            self.run_git_command(&["rev-parse", "HEAD"], "Failed to get current commit SHA")?;
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
