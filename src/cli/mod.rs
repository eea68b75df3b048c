//! Command-line interface for the gitignore workflow.
//!
//! The launcher runs the binary once per action:
//!
//! - `update` - clone or pull the template mirror and rebuild the catalog
//! - `input` - print result items for the current query as JSON
//! - `build` - merge the selected templates and open the result
//! - `clean` - remove cached build artifacts
//!
//! # Output Conventions
//!
//! Stdout belongs to the launcher: JSON items for `input`, short status
//! lines for the other commands. Logs and the single error line go to
//! stderr.
//!
//! ```bash
//! gitignore-workflow update
//! gitignore-workflow input "go no"
//! gitignore-workflow build Go Node --no-open
//! RUST_LOG=git=debug gitignore-workflow update
//! ```

mod build;
mod clean;
mod input;
mod update;


use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub use build::BuildCommand;
pub use clean::CleanCommand;
pub use input::InputCommand;
pub use update::UpdateCommand;

use crate::config::{CliOverrides, HostEnv, WorkflowConfig};

/// Top-level command-line interface.
#[derive(Parser, Debug)]
#[command(
    name = "gitignore-workflow",
    about = "Build .gitignore files from the github/gitignore templates",
    version,
    long_about = "Keeps a local mirror of https://github.com/github/gitignore, suggests templates \
                  while you type, and merges the chosen ones into a single .gitignore file."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log debug output to stderr (overridden by `RUST_LOG`)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Settings file to use instead of `<data-dir>/config.toml`
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory holding the catalog and the mirror
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Location of the template mirror
    #[arg(long, global = true, value_name = "DIR")]
    repository: Option<PathBuf>,

    /// Directory for built artifacts
    #[arg(long, global = true, value_name = "DIR")]
    cache_dir: Option<PathBuf>,

    /// Template repository to clone
    #[arg(long, global = true, value_name = "URL")]
    remote: Option<String>,

    /// Timeout for each git invocation in seconds, 0 for none
    #[arg(long, global = true, value_name = "SECONDS")]
    git_timeout: Option<u64>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download or refresh the templates
    Update(UpdateCommand),

    /// Print launcher items for a partial query
    Input(InputCommand),

    /// Merge templates into a .gitignore file
    Build(BuildCommand),

    /// Remove cached .gitignore files
    Clean(CleanCommand),
}

impl Cli {
    /// Initializes logging, resolves the configuration from the process
    /// environment and runs the subcommand.
    pub async fn execute(self) -> Result<()> {
        init_logging(self.verbose, self.quiet);
        self.execute_with_env(&HostEnv::from_process()).await
    }

    /// Runs the subcommand against an explicit environment snapshot.
    pub async fn execute_with_env(self, env: &HostEnv) -> Result<()> {
        let config = WorkflowConfig::resolve(&self.overrides(), env)?;

        match self.command {
            Commands::Update(cmd) => cmd.execute(&config).await,
            Commands::Input(cmd) => cmd.execute(&config),
            Commands::Build(cmd) => cmd.execute(&config),
            Commands::Clean(cmd) => cmd.execute(&config),
        }
    }

    /// The configuration layer contributed by command-line flags.
    #[must_use]
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            config: self.config.clone(),
            data_dir: self.data_dir.clone(),
            mirror_dir: self.repository.clone(),
            cache_dir: self.cache_dir.clone(),
            remote_url: self.remote.clone(),
            git_timeout_secs: self.git_timeout,
            no_open: matches!(&self.command, Commands::Build(cmd) if cmd.no_open),
        }
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `warn`, `debug` with
/// `--verbose`, or `error` with `--quiet`.
pub fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(verbose)
        .try_init();
}
