//! Remove cached build artifacts.

use anyhow::Result;
use clap::Args;

use crate::builder::clean_artifacts;
use crate::config::WorkflowConfig;

/// Delete every merged .gitignore file from the cache directory.
#[derive(Args, Debug, Default)]
pub struct CleanCommand {}

impl CleanCommand {
    pub fn execute(self, config: &WorkflowConfig) -> Result<()> {
        let removed = clean_artifacts(&config.cache_dir)?;
        match removed {
            1 => println!("Removed 1 cached .gitignore file."),
            n => println!("Removed {n} cached .gitignore files."),
        }
        Ok(())
    }
}
