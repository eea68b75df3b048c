//! Merge the selected templates and hand the result to the user.

use anyhow::{Context, Result};
use clap::Args;
use std::io::Write;

use crate::builder::Builder;
use crate::config::WorkflowConfig;
use crate::selector::tokenize;

/// Merge templates into a single .gitignore file.
///
/// Prints the artifact path and a status line, then opens the file with the
/// system's default application.
#[derive(Args, Debug, Default)]
pub struct BuildCommand {
    /// Template names, in output order (the build item's argument)
    pub templates: Vec<String>,

    /// Write the merged contents to stdout instead of the path
    #[arg(long)]
    pub print: bool,

    /// Do not open the artifact
    #[arg(long)]
    pub no_open: bool,
}

impl BuildCommand {
    pub fn execute(self, config: &WorkflowConfig) -> Result<()> {
        let selection = self.selection();
        let artifact = Builder::new(config).build_artifact(&selection)?;

        if self.print {
            let content = std::fs::read(&artifact.path)
                .with_context(|| format!("Failed to read {}", artifact.path.display()))?;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&content).context("Failed to write to stdout")?;
            stdout.flush().context("Failed to write to stdout")?;
            return Ok(());
        }

        println!("{}", artifact.path.display());
        if artifact.cached {
            println!("Using cached .gitignore file.");
        } else {
            println!("Successfully built .gitignore file. Have fun!");
        }

        if config.open_artifacts {
            if let Err(e) = open::that(&artifact.path) {
                tracing::warn!("Could not open {}: {e}", artifact.path.display());
            }
        }
        Ok(())
    }

    /// Template names with whitespace-separated arguments split apart and
    /// empty names dropped.
    pub fn selection(&self) -> Vec<String> {
        tokenize(&self.templates).into_iter().filter(|name| !name.is_empty()).collect()
    }
}
