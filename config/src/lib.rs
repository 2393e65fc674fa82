//! Configuration for tracee.
//!
//! Configuration is optional. With no file on disk and no environment
//! overrides, a run reproduces [`Revision::Final`]:
//!
//! ```toml
//! [run]
//! revision = "final"
//! delay_ms = 100
//!
//! [reporter]
//! message = "print called"
//! ```

use serde::Deserialize;
use std::{
    env,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

use tracee_types::Revision;

/// Overrides the config file location.
pub const CONFIG_ENV: &str = "TRACEE_CONFIG";
/// Overrides `[run] revision`.
pub const REVISION_ENV: &str = "TRACEE_REVISION";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TraceeConfig {
    pub run: Option<RunConfig>,
    pub reporter: Option<ReporterConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    pub revision: Option<Revision>,
    /// Per-iteration pause in milliseconds. Overrides the revision's delay.
    pub delay_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReporterConfig {
    /// Line the external reporter writes. Unset means the reporter is silent.
    pub message: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl TraceeConfig {
    /// Load from [`config_path`]. A missing file is not an error.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(None);
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    pub fn path() -> Option<PathBuf> {
        config_path()
    }
}

/// `$TRACEE_CONFIG`, else `~/.tracee/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    if let Ok(raw) = env::var(CONFIG_ENV)
        && !raw.trim().is_empty()
    {
        return Some(PathBuf::from(raw));
    }
    dirs::home_dir().map(|home| home.join(".tracee").join("config.toml"))
}

/// `~/.tracee/logs/tracee.log`, wherever the config file lives.
pub fn log_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".tracee").join("logs").join("tracee.log"))
}

/// Everything a run needs, after config and environment are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub revision: Revision,
    pub delay: Duration,
    pub reporter_message: Option<String>,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self::for_revision(Revision::default())
    }
}

impl RunSettings {
    #[must_use]
    pub fn for_revision(revision: Revision) -> Self {
        Self {
            revision,
            delay: revision.delay(),
            reporter_message: None,
        }
    }

    /// Merge config with the process environment.
    #[must_use]
    pub fn resolve(config: Option<&TraceeConfig>) -> Self {
        let env_revision = env::var(REVISION_ENV).ok();
        Self::resolve_with(config, env_revision.as_deref())
    }

    /// Precedence for the revision: `env_revision`, then `[run] revision`,
    /// then the default. An unparsable `env_revision` is ignored with a warning.
    #[must_use]
    pub fn resolve_with(config: Option<&TraceeConfig>, env_revision: Option<&str>) -> Self {
        let run = config.and_then(|cfg| cfg.run.as_ref());

        let from_env = env_revision.and_then(|raw| match raw.parse::<Revision>() {
            Ok(revision) => Some(revision),
            Err(err) => {
                tracing::warn!(env_var = REVISION_ENV, "Ignoring override: {err}");
                None
            }
        });
        let revision = from_env
            .or_else(|| run.and_then(|run| run.revision))
            .unwrap_or_default();

        let delay = run
            .and_then(|run| run.delay_ms)
            .map_or_else(|| revision.delay(), Duration::from_millis);

        let reporter_message = config
            .and_then(|cfg| cfg.reporter.as_ref())
            .and_then(|reporter| reporter.message.clone());

        Self {
            revision,
            delay,
            reporter_message,
        }
    }
}
