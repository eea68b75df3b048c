//! Test utilities for the workflow
//!
//! Helpers for building local template repositories and for enabling
//! logging in tests. Compiled for unit tests and, through the `test-utils`
//! feature, for the integration tests.
//!
//! # Example
//!
//! ```rust,no_run
//! use gitignore_workflow::test_utils::{create_template_repo, file_url};
//!
//! # fn example() -> anyhow::Result<()> {
//! let temp = tempfile::tempdir()?;
//! let remote = create_template_repo(&temp.path().join("remote"), &[("Node", "node_modules/\n")])?;
//! let url = file_url(&remote);
//! # Ok(())
//! # }
//! ```

pub mod fixtures;
pub mod git_helper;

pub use fixtures::{create_template_repo, file_url, write_templates};
pub use git_helper::TestGit;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. An explicit `level` wins; otherwise
/// `RUST_LOG` is honored, and without either nothing is logged.
///
/// ```bash
/// RUST_LOG=git=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}
