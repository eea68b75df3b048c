//! gitignore-workflow entry point
//!
//! Parses the command line, runs the command on a single-threaded runtime,
//! and turns any error into one line on stderr with exit status 1.

use anyhow::Result;
use clap::Parser;
use gitignore_workflow::cli;
use gitignore_workflow::core::user_friendly_error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            user_friendly_error(e).display();
            std::process::exit(1);
        }
    }
}
