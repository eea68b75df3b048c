//! Error handling for the workflow.
//!
//! Each command handler has its own strongly-typed error enum:
//! - [`SyncError`] for the `update` command (git clone/pull, scanning, storage)
//! - [`BuildError`] for the `build` command
//! - [`ConfigError`] for resolving [`crate::config::WorkflowConfig`]
//!
//! A missing catalog is deliberately *not* an error: the selector reports it
//! as a diagnostic item so the launcher can show it inline.
//!
//! Handlers return these enums; the CLI layer carries them inside
//! [`anyhow::Error`] and [`user_friendly_error`] turns them back into an
//! [`ErrorContext`] with an actionable suggestion for the single line the
//! process prints before exiting with a non-zero status.
//!
//! # Examples
//!
//! ```rust,no_run
//! use gitignore_workflow::core::{BuildError, user_friendly_error};
//!
//! let error = anyhow::Error::from(BuildError::EmptySelection);
//! let ctx = user_friendly_error(error);
//! ctx.display(); // error: No templates were selected, so nothing was built. ...
//! ```

use colored::Colorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while synchronizing the mirror or rebuilding the catalog.
///
/// Git failures are split by cause so the user gets a message they can act
/// on: a missing executable needs an install, a network failure needs a
/// connection, and anything else carries git's own stderr.
#[derive(Error, Debug)]
pub enum SyncError {
    /// Git executable not found in PATH
    #[error("Git is not installed or not found in PATH")]
    GitNotFound,

    /// The git process could not be spawned even though it was found.
    #[error("Failed to start git {operation}: {source}")]
    Spawn {
        /// The git operation (e.g., "clone", "pull")
        operation: String,
        /// The operating system error
        #[source]
        source: std::io::Error,
    },

    /// Git reported a network or authentication problem
    #[error("Network error during git {operation}: {}", first_line(.stderr))]
    Network {
        /// The git operation that failed
        operation: String,
        /// The error output from the git command
        stderr: String,
    },

    /// Git exited with a non-zero status for any other reason
    #[error("git {operation} failed ({}): {}", describe_exit(.code), first_line(.stderr))]
    CommandFailed {
        /// The git operation that failed
        operation: String,
        /// Exit code, `None` when git was terminated by a signal
        code: Option<i32>,
        /// The error output from the git command
        stderr: String,
    },

    /// The configured timeout expired before git finished
    #[error("git {operation} timed out after {seconds} seconds")]
    TimedOut {
        /// The git operation that timed out
        operation: String,
        /// The timeout that expired
        seconds: u64,
    },

    /// The mirror path is occupied by something other than a git working copy
    #[error("Mirror path exists but is not a git repository: {}", .path.display())]
    MirrorInvalid {
        /// The offending mirror path
        path: PathBuf,
    },

    /// The staging directory for a fresh clone could not be set up or moved
    /// into place
    #[error("Failed to prepare the template mirror at {}: {reason}", .path.display())]
    Stage {
        /// Mirror directory being created
        path: PathBuf,
        /// Underlying failure
        reason: String,
    },

    /// Walking the mirror for templates failed
    #[error("Failed to scan templates in {}: {reason}", .path.display())]
    Scan {
        /// Mirror directory being scanned
        path: PathBuf,
        /// Underlying failure
        reason: String,
    },

    /// Persisting the new catalog failed; the previous catalog is untouched
    #[error("Failed to store template catalog: {reason}")]
    Storage {
        /// Underlying failure
        reason: String,
    },
}

/// Failure while merging templates into an artifact.
#[derive(Error, Debug)]
pub enum BuildError {
    /// No template names were given
    #[error("No templates were selected, so nothing was built")]
    EmptySelection,

    /// Build attempted before the first sync
    #[error("Template mirror not found at {}", .path.display())]
    MirrorMissing {
        /// Expected mirror location
        path: PathBuf,
    },

    /// A template file could not be read
    #[error("Failed to read template {}: {source}", .path.display())]
    Read {
        /// Template file
        path: PathBuf,
        /// The operating system error
        #[source]
        source: std::io::Error,
    },

    /// Walking the mirror for template files failed
    #[error("Failed to index templates in {}: {reason}", .path.display())]
    Scan {
        /// Mirror directory being indexed
        path: PathBuf,
        /// Underlying failure
        reason: String,
    },

    /// The artifact could not be written
    #[error("Failed to write artifact {}: {reason}", .path.display())]
    Write {
        /// Artifact or directory involved
        path: PathBuf,
        /// Underlying failure
        reason: String,
    },
}

/// Failure while resolving the workflow configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The settings file exists but could not be read
    #[error("Failed to read settings file {}: {source}", .path.display())]
    Read {
        /// Settings file
        path: PathBuf,
        /// The operating system error
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid TOML for [`crate::config::WorkflowSettings`]
    #[error("Invalid settings file {}: {}", .path.display(), .source.message())]
    Parse {
        /// Settings file
        path: PathBuf,
        /// TOML error
        #[source]
        source: toml::de::Error,
    },

    /// A configured path could not be expanded
    #[error("Invalid path '{value}': {reason}")]
    InvalidPath {
        /// The raw configured value
        value: String,
        /// Why expansion failed
        reason: String,
    },

    /// No data directory could be determined
    #[error("Could not determine the workflow data directory: {reason}")]
    DataDir {
        /// Why resolution failed
        reason: String,
    },
}

fn first_line(text: &str) -> &str {
    text.lines().map(str::trim).find(|line| !line.is_empty()).unwrap_or("no error output")
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

/// Error context wrapper that provides user-friendly error information.
///
/// Holds the rendered error message plus an optional suggestion, shown on the
/// same line, and optional details, which are only logged.
#[derive(Debug)]
pub struct ErrorContext {
    /// The rendered error message
    pub message: String,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error (logged at debug level)
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context from any displayable error.
    pub fn new(error: impl fmt::Display) -> Self {
        Self {
            message: error.to_string(),
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error as a single line on stderr.
    ///
    /// Details, when present, go to the `debug` log instead so that the
    /// launcher only ever sees one line.
    pub fn display(&self) {
        if let Some(details) = &self.details {
            tracing::debug!("{details}");
        }
        eprintln!("{}: {}", "error".red().bold(), self.line());
    }

    fn line(&self) -> String {
        match &self.suggestion {
            Some(suggestion) => format!("{}. {suggestion}", self.message.trim_end_matches('.')),
            None => self.message.clone(),
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.line())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with actionable suggestions.
///
/// Recognizes [`SyncError`], [`BuildError`], [`ConfigError`] and
/// [`std::io::Error`]; anything else is rendered with its full cause chain
/// flattened onto one line.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(sync_error) = error.downcast_ref::<SyncError>() {
        return sync_error_context(sync_error);
    }

    if let Some(build_error) = error.downcast_ref::<BuildError>() {
        return build_error_context(build_error);
    }

    if let Some(config_error) = error.downcast_ref::<ConfigError>() {
        return ErrorContext::new(config_error)
            .with_suggestion("Fix or remove the settings file, or pass the directory explicitly");
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(format!("{error:#}"))
                    .with_suggestion("Check the permissions of the workflow data and cache directories");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(format!("{error:#}"))
                    .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            _ => {}
        }
    }

    // Generic error - flatten the chain onto a single line
    ErrorContext::new(format!("{error:#}"))
}

fn sync_error_context(error: &SyncError) -> ErrorContext {
    let ctx = ErrorContext::new(error);
    match error {
        SyncError::GitNotFound | SyncError::Spawn { .. } => ctx
            .with_suggestion("Install git from https://git-scm.com/ or your package manager (e.g., 'brew install git')")
            .with_details("Templates are downloaded with the system git executable"),
        SyncError::Network { stderr, .. } => ctx
            .with_suggestion("Check your internet connection and run update again")
            .with_details(stderr.clone()),
        SyncError::CommandFailed { stderr, .. } => ctx
            .with_suggestion("Run update again; if it keeps failing, delete the template mirror and retry")
            .with_details(stderr.clone()),
        SyncError::TimedOut { .. } => ctx.with_suggestion(
            "Check your connection, or raise git_timeout_secs in the settings file",
        ),
        SyncError::MirrorInvalid { .. } => {
            ctx.with_suggestion("Move the directory away so the templates can be cloned there")
        }
        SyncError::Stage { .. } | SyncError::Scan { .. } | SyncError::Storage { .. } => {
            ctx.with_suggestion("Check the permissions of the workflow data directory")
        }
    }
}

fn build_error_context(error: &BuildError) -> ErrorContext {
    let ctx = ErrorContext::new(error);
    match error {
        BuildError::EmptySelection => ctx.with_suggestion("Pick at least one template"),
        BuildError::MirrorMissing { .. } => {
            ctx.with_suggestion("Please run update first to download the templates")
        }
        BuildError::Read { .. } | BuildError::Scan { .. } => {
            ctx.with_suggestion("Run update to restore the template mirror")
        }
        BuildError::Write { .. } => {
            ctx.with_suggestion("Check that the cache directory is writable")
        }
    }
}
