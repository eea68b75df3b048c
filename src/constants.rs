//! Global constants used throughout the workflow.
//!
//! Timeouts, file names, storage keys and the default remote live here so
//! that the handlers and their tests agree on them.

use std::time::Duration;

/// Public repository that hosts the community `.gitignore` templates.
pub const DEFAULT_REMOTE_URL: &str = "https://github.com/github/gitignore.git";

/// Suffix every template file carries. Matched case-insensitively.
pub const TEMPLATE_SUFFIX: &str = ".gitignore";

/// Directory name used under the platform data and temp directories.
pub const APP_DIR_NAME: &str = "gitignore-workflow";

/// Name of the mirror directory inside the data directory.
pub const MIRROR_DIR_NAME: &str = "gitignore";

/// Store key holding the sorted list of template names.
pub const CATALOG_KEY: &str = "templates";

/// File name of the optional TOML settings file inside the data directory.
pub const SETTINGS_FILE_NAME: &str = "config.toml";

/// Default timeout for git clone and pull (5 minutes).
pub const DEFAULT_GIT_TIMEOUT: Duration = Duration::from_secs(300);

/// Git operations slower than this are reported on the `git::perf` target.
pub const SLOW_GIT_OPERATION: Duration = Duration::from_secs(1);

/// Host variable pointing at the workflow's private data directory.
pub const ENV_WORKFLOW_DATA: &str = "alfred_workflow_data";

/// Host variable pointing at the workflow's cache directory.
pub const ENV_WORKFLOW_CACHE: &str = "alfred_workflow_cache";

/// Override for the remote template repository.
pub const ENV_REMOTE_URL: &str = "GITIGNORE_WORKFLOW_REMOTE";
