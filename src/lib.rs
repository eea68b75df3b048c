//! gitignore-workflow
//!
//! A launcher plugin that assembles `.gitignore` files from the community
//! template collection at <https://github.com/github/gitignore>.
//!
//! # Architecture Overview
//!
//! Three command handlers share one [`config::WorkflowConfig`]:
//!
//! - [`fetcher`] - clone or pull the local mirror and rebuild the catalog
//! - [`selector`] - filter the catalog while the user types
//! - [`builder`] - concatenate templates into a cached artifact
//!
//! ## Supporting Modules
//! - [`catalog`] - the template catalog and its JSON store
//! - [`cli`] - command-line interface
//! - [`config`] - layered configuration (defaults, settings file, environment, flags)
//! - [`core`] - error types and user-facing error context
//! - [`git`] - wrapper around the system `git` command
//! - [`utils`] - filesystem and platform helpers
//!
//! # Data Layout
//!
//! ```text
//! <data_dir>/
//! ├── config.toml        optional settings
//! ├── templates.json     catalog, a sorted JSON array of names
//! └── gitignore/         git working copy of the template repository
//! <cache_dir>/
//! └── <sha256>.gitignore merged artifacts
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gitignore_workflow::builder::Builder;
//! use gitignore_workflow::config::WorkflowConfig;
//! use gitignore_workflow::fetcher::Fetcher;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = WorkflowConfig::new("/tmp/gitignore-data", "/tmp/gitignore-cache");
//! Fetcher::new(&config).sync().await?;
//!
//! let selection = vec!["Rust".to_string(), "macOS".to_string()];
//! let path = Builder::new(&config).build(&selection)?;
//! println!("{}", path.display());
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod fetcher;
pub mod git;
pub mod selector;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
