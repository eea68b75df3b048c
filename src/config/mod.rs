//! Layered workflow configuration.
//!
//! A [`WorkflowConfig`] is resolved once per invocation and handed to the
//! command handlers. Later layers win:
//!
//! 1. Built-in defaults (platform data directory, system temp directory,
//!    the public template repository)
//! 2. The optional [`WorkflowSettings`] file, `<data_dir>/config.toml` unless
//!    `--config` names another one
//! 3. The launcher's environment, captured in [`HostEnv`]
//! 4. Command-line flags, captured in [`CliOverrides`]
//!
//! The data directory itself cannot come from the settings file, since the
//! settings file is looked up inside it.
//!
//! # Examples
//!
//! ```rust,no_run
//! use gitignore_workflow::config::{CliOverrides, HostEnv, WorkflowConfig};
//!
//! # fn example() -> Result<(), gitignore_workflow::core::ConfigError> {
//! let config = WorkflowConfig::resolve(&CliOverrides::default(), &HostEnv::from_process())?;
//! println!("mirror: {}", config.mirror_dir.display());
//! # Ok(())
//! # }
//! ```

pub mod settings;

use std::path::{Path, PathBuf};
use std::time::Duration;

pub use settings::WorkflowSettings;

use crate::catalog::DataStore;
use crate::constants::{
    DEFAULT_GIT_TIMEOUT, DEFAULT_REMOTE_URL, ENV_REMOTE_URL, ENV_WORKFLOW_CACHE,
    ENV_WORKFLOW_DATA, MIRROR_DIR_NAME, SETTINGS_FILE_NAME,
};
use crate::core::ConfigError;
use crate::utils::platform::{get_cache_dir, get_data_dir, resolve_path};

/// Snapshot of the environment variables the workflow reads.
///
/// Captured once in `main` so that nothing else touches the process
/// environment. Empty values count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostEnv {
    /// `alfred_workflow_data`
    pub data_dir: Option<String>,
    /// `alfred_workflow_cache`
    pub cache_dir: Option<String>,
    /// `GITIGNORE_WORKFLOW_REMOTE`
    pub remote_url: Option<String>,
}

impl HostEnv {
    /// Reads the variables from the current process environment.
    #[must_use]
    pub fn from_process() -> Self {
        let read = |key: &str| std::env::var(key).ok().filter(|value| !value.trim().is_empty());
        Self {
            data_dir: read(ENV_WORKFLOW_DATA),
            cache_dir: read(ENV_WORKFLOW_CACHE),
            remote_url: read(ENV_REMOTE_URL),
        }
    }
}

/// Values given on the command line. `None` means the flag was absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub config: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    pub mirror_dir: Option<PathBuf>,
    pub cache_dir: Option<PathBuf>,
    pub remote_url: Option<String>,
    pub git_timeout_secs: Option<u64>,
    pub no_open: bool,
}

/// Fully resolved configuration shared by the command handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowConfig {
    /// Holds the data store and the default mirror location
    pub data_dir: PathBuf,
    /// Local git working copy of the template repository
    pub mirror_dir: PathBuf,
    /// Where build artifacts are written
    pub cache_dir: PathBuf,
    /// Repository cloned into `mirror_dir`
    pub remote_url: String,
    /// Limit for each git invocation, `None` for no limit
    pub git_timeout: Option<Duration>,
    /// Whether `build` opens the artifact with the system handler
    pub open_artifacts: bool,
}

impl WorkflowConfig {
    /// Default configuration rooted at the given directories.
    ///
    /// The mirror goes to `<data_dir>/gitignore`.
    pub fn new(data_dir: impl Into<PathBuf>, cache_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            mirror_dir: data_dir.join(MIRROR_DIR_NAME),
            data_dir,
            cache_dir: cache_dir.into(),
            remote_url: DEFAULT_REMOTE_URL.to_string(),
            git_timeout: Some(DEFAULT_GIT_TIMEOUT),
            open_artifacts: true,
        }
    }

    /// Resolves the configuration from all layers.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::DataDir`] when no data directory can be determined
    /// - [`ConfigError::Read`] or [`ConfigError::Parse`] for a broken settings
    ///   file, or when `--config` names a file that does not exist
    /// - [`ConfigError::InvalidPath`] when a configured path cannot be expanded
    pub fn resolve(cli: &CliOverrides, env: &HostEnv) -> Result<Self, ConfigError> {
        let data_dir = match (&cli.data_dir, &env.data_dir) {
            (Some(dir), _) => dir.clone(),
            (None, Some(dir)) => expand(dir)?,
            (None, None) => get_data_dir().map_err(|e| ConfigError::DataDir {
                reason: format!("{e:#}"),
            })?,
        };

        let settings = match &cli.config {
            Some(path) => WorkflowSettings::load_from(path)?,
            None => WorkflowSettings::load_optional(&Self::default_settings_path(&data_dir))?
                .unwrap_or_default(),
        };

        let mut config = Self::new(&data_dir, get_cache_dir());
        config.apply_settings(&settings)?;
        config.apply_env(env)?;
        config.apply_cli(cli);

        tracing::debug!(
            "Resolved configuration: data_dir={}, mirror_dir={}, cache_dir={}, remote_url={}",
            config.data_dir.display(),
            config.mirror_dir.display(),
            config.cache_dir.display(),
            config.remote_url
        );
        Ok(config)
    }

    fn apply_settings(&mut self, settings: &WorkflowSettings) -> Result<(), ConfigError> {
        if let Some(url) = &settings.remote_url {
            self.remote_url.clone_from(url);
        }
        if let Some(dir) = &settings.mirror_dir {
            self.mirror_dir = expand(dir)?;
        }
        if let Some(dir) = &settings.cache_dir {
            self.cache_dir = expand(dir)?;
        }
        if let Some(secs) = settings.git_timeout_secs {
            self.git_timeout = timeout_from_secs(secs);
        }
        if let Some(open) = settings.open_artifacts {
            self.open_artifacts = open;
        }
        Ok(())
    }

    fn apply_env(&mut self, env: &HostEnv) -> Result<(), ConfigError> {
        if let Some(dir) = &env.cache_dir {
            self.cache_dir = expand(dir)?;
        }
        if let Some(url) = &env.remote_url {
            self.remote_url.clone_from(url);
        }
        Ok(())
    }

    fn apply_cli(&mut self, cli: &CliOverrides) {
        if let Some(dir) = &cli.mirror_dir {
            self.mirror_dir.clone_from(dir);
        }
        if let Some(dir) = &cli.cache_dir {
            self.cache_dir.clone_from(dir);
        }
        if let Some(url) = &cli.remote_url {
            self.remote_url.clone_from(url);
        }
        if let Some(secs) = cli.git_timeout_secs {
            self.git_timeout = timeout_from_secs(secs);
        }
        if cli.no_open {
            self.open_artifacts = false;
        }
    }

    /// The key-value store inside the data directory.
    #[must_use]
    pub fn store(&self) -> DataStore {
        DataStore::new(&self.data_dir)
    }

    /// Location of the settings file used when `--config` is absent.
    #[must_use]
    pub fn default_settings_path(data_dir: &Path) -> PathBuf {
        data_dir.join(SETTINGS_FILE_NAME)
    }
}

fn timeout_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

fn expand(value: &str) -> Result<PathBuf, ConfigError> {
    resolve_path(value).map_err(|e| ConfigError::InvalidPath {
        value: value.to_string(),
        reason: e.root_cause().to_string(),
    })
}
