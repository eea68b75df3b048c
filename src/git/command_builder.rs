//! Fluent builder for git invocations
//!
//! Every call to the external git binary goes through [`GitCommand`] so that
//! logging, timeouts and error classification are the same for clone and pull.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::Command;
use tokio::time::timeout;

use crate::constants::{DEFAULT_GIT_TIMEOUT, SLOW_GIT_OPERATION};
use crate::core::SyncError;
use crate::utils::platform::get_git_command;

/// Stderr fragments that identify a network or authentication failure.
///
/// Compared case-insensitively against git's error output.
const NETWORK_SIGNATURES: &[&str] = &[
    "could not resolve host",
    "unable to access",
    "failed to connect",
    "connection refused",
    "connection timed out",
    "authentication failed",
    "could not read username",
    "network is unreachable",
    "ssl certificate",
    "ssl_connect",
];

/// Builder for a single git invocation.
///
/// # Examples
///
/// ```rust,no_run
/// use gitignore_workflow::git::command_builder::GitCommand;
///
/// # async fn example() -> Result<(), gitignore_workflow::core::SyncError> {
/// GitCommand::pull()
///     .current_dir("/path/to/mirror")
///     .with_context("template mirror")
///     .execute()
///     .await?;
/// # Ok(())
/// # }
/// ```
///
/// # Defaults
///
/// - **Timeout**: [`DEFAULT_GIT_TIMEOUT`]
/// - **Prompts**: `GIT_TERMINAL_PROMPT=0`, so git fails instead of waiting
///   for credentials nobody can type
/// - **Working directory**: the process directory unless [`Self::current_dir`]
///   is set
pub struct GitCommand {
    args: Vec<OsString>,
    current_dir: Option<PathBuf>,
    env_vars: Vec<(String, String)>,
    timeout_duration: Option<Duration>,
    context: Option<String>,
}

impl Default for GitCommand {
    fn default() -> Self {
        Self {
            args: Vec::new(),
            current_dir: None,
            env_vars: vec![("GIT_TERMINAL_PROMPT".to_string(), "0".to_string())],
            timeout_duration: Some(DEFAULT_GIT_TIMEOUT),
            context: None,
        }
    }
}

/// Captured output of a successful git invocation.
#[derive(Debug, Clone)]
pub struct GitCommandOutput {
    /// Standard output, lossily decoded
    pub stdout: String,
    /// Standard error, lossily decoded
    pub stderr: String,
}

impl GitCommand {
    /// Creates an empty command with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs git inside `dir` (passed as `git -C <dir>`).
    #[must_use]
    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.current_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Appends one argument.
    #[must_use]
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    /// Appends several arguments.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args.extend(args.into_iter().map(|arg| arg.as_ref().to_os_string()));
        self
    }

    /// Replaces the timeout. `None` lets git run for as long as it needs.
    #[must_use]
    pub fn with_timeout(mut self, duration: Option<Duration>) -> Self {
        self.timeout_duration = duration;
        self
    }

    /// Adds a label that prefixes every log line of this invocation.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// `git clone <url> <target>`
    #[must_use]
    pub fn clone(url: &str, target: impl AsRef<Path>) -> Self {
        Self::new().args(["clone", "--quiet", url]).arg(target.as_ref())
    }

    /// `git pull --ff-only`
    ///
    /// The mirror is never edited locally, so a fast-forward is always
    /// possible unless the remote history was rewritten.
    #[must_use]
    pub fn pull() -> Self {
        Self::new().args(["pull", "--ff-only", "--quiet"])
    }

    /// The git subcommand, used to label errors and log lines.
    fn operation(&self) -> String {
        self.args
            .first()
            .map(|arg| arg.to_string_lossy().into_owned())
            .unwrap_or_else(|| "unknown".to_string())
    }

    /// Runs the command and captures its output.
    ///
    /// # Errors
    ///
    /// - [`SyncError::GitNotFound`] when the executable is not on `PATH`
    /// - [`SyncError::Spawn`] for any other spawn failure
    /// - [`SyncError::TimedOut`] when the timeout expires; the child is killed
    /// - [`SyncError::Network`] when a non-zero exit looks like a network or
    ///   authentication problem
    /// - [`SyncError::CommandFailed`] for every other non-zero exit
    pub async fn execute(self) -> Result<GitCommandOutput, SyncError> {
        let start = Instant::now();
        let git_command = get_git_command();
        let operation = self.operation();
        let label = self.context.as_deref().map(|ctx| format!("({ctx}) ")).unwrap_or_default();

        let mut full_args: Vec<OsString> = Vec::new();
        if let Some(ref dir) = self.current_dir {
            full_args.push("-C".into());
            full_args.push(dir.as_os_str().to_os_string());
        }
        full_args.extend(self.args.iter().cloned());
        let printable = full_args.iter().map(|arg| arg.to_string_lossy()).collect::<Vec<_>>().join(" ");

        tracing::debug!(
            target: "git",
            "{}Executing command: {} {}",
            label,
            git_command,
            printable
        );

        let mut cmd = Command::new(git_command);
        cmd.args(&full_args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        for (key, value) in &self.env_vars {
            tracing::trace!(target: "git", "Setting env var: {}={}", key, value);
            cmd.env(key, value);
        }

        let output_future = cmd.output();
        let result = match self.timeout_duration {
            Some(duration) => match timeout(duration, output_future).await {
                Ok(result) => result,
                Err(_) => {
                    tracing::warn!(
                        target: "git",
                        "{}Command timed out after {} seconds: git {}",
                        label,
                        duration.as_secs(),
                        printable
                    );
                    return Err(SyncError::TimedOut {
                        operation,
                        seconds: duration.as_secs(),
                    });
                }
            },
            None => output_future.await,
        };

        let output = result.map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                SyncError::GitNotFound
            } else {
                SyncError::Spawn {
                    operation: operation.clone(),
                    source,
                }
            }
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            tracing::debug!(
                target: "git",
                "{}Command failed with exit code: {:?}",
                label,
                output.status.code()
            );
            if !stderr.is_empty() {
                tracing::debug!(target: "git", "{}Error: {}", label, stderr.trim());
            }
            return Err(classify_failure(operation, output.status.code(), stderr));
        }

        if !stdout.is_empty() {
            tracing::debug!(target: "git", "{}{}", label, stdout.trim());
        }
        if !stderr.is_empty() {
            tracing::debug!(target: "git", "{}{}", label, stderr.trim());
        }

        let elapsed = start.elapsed();
        if elapsed > SLOW_GIT_OPERATION {
            tracing::info!(
                target: "git::perf",
                "{}Git {} took {:.2}s",
                label,
                operation,
                elapsed.as_secs_f64()
            );
        } else {
            tracing::debug!(
                target: "git::perf",
                "{}Git {} took {}ms",
                label,
                operation,
                elapsed.as_millis()
            );
        }

        Ok(GitCommandOutput {
            stdout,
            stderr,
        })
    }
}

/// Turns a non-zero git exit into a typed error.
///
/// Network and authentication failures are recognized by their stderr
/// signature; everything else keeps git's own message.
#[must_use]
pub fn classify_failure(operation: String, code: Option<i32>, stderr: String) -> SyncError {
    let lowered = stderr.to_lowercase();
    if NETWORK_SIGNATURES.iter().any(|signature| lowered.contains(signature)) {
        SyncError::Network {
            operation,
            stderr,
        }
    } else {
        SyncError::CommandFailed {
            operation,
            code,
            stderr,
        }
    }
}
