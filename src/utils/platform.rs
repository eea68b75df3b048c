//! Platform-specific helpers.
//!
//! Directory resolution, tilde and environment expansion, and the name of the
//! git executable differ between Windows, macOS, and Linux. Everything that
//! depends on those differences goes through this module.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::constants::APP_DIR_NAME;

/// Checks if the current platform is Windows.
#[must_use]
pub const fn is_windows() -> bool {
    cfg!(windows)
}

/// Returns the git executable name for this platform.
///
/// The binary is looked up on `PATH`; see [`crate::git::ensure_git_available`]
/// for the check that turns a missing executable into a typed error.
#[must_use]
pub const fn get_git_command() -> &'static str {
    if is_windows() {
        "git.exe"
    } else {
        "git"
    }
}

/// Resolves a user-supplied path with tilde expansion and `$VAR` substitution.
///
/// # Examples
///
/// ```rust,no_run
/// use gitignore_workflow::utils::platform::resolve_path;
///
/// # fn example() -> anyhow::Result<()> {
/// let mirror = resolve_path("~/Library/Application Support/gitignore")?;
/// let cache = resolve_path("$TMPDIR/gitignore-workflow")?;
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Fails when the path references an environment variable that is not set, or
/// when the home directory cannot be determined for `~`.
pub fn resolve_path(path: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(path)
        .with_context(|| format!("Failed to expand path: {path}"))?;
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Returns the default data directory for the workflow.
///
/// This is the platform data directory (for example
/// `~/Library/Application Support` on macOS) joined with the workflow name.
/// The launcher normally overrides it through its own environment variable.
pub fn get_data_dir() -> Result<PathBuf> {
    dirs::data_dir().map(|p| p.join(APP_DIR_NAME)).ok_or_else(|| {
        let platform_help = if is_windows() {
            "On Windows: Check that the APPDATA environment variable is set"
        } else if cfg!(target_os = "macos") {
            "On macOS: Check that the HOME environment variable is set"
        } else {
            "On Linux: Check that the XDG_DATA_HOME or HOME environment variable is set"
        };
        anyhow::anyhow!("Could not determine data directory.\n\n{platform_help}")
    })
}

/// Returns the default artifact cache directory, a subdirectory of the
/// system temp directory shared by all invocations.
#[must_use]
pub fn get_cache_dir() -> PathBuf {
    std::env::temp_dir().join(APP_DIR_NAME)
}
