use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

// =============================================================================
// Feed constants
// =============================================================================

/// Package identifier the tool is published under
pub const PACKAGE_ID: &str = "Microsoft.Agents.A365.DevTools.Cli";

/// Default NuGet v3 flat-container base URL
pub const DEFAULT_FEED_URL: &str = "https://api.nuget.org/v3-flatcontainer";

/// Timeout for the feed request in milliseconds (5 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 5_000;

/// Version of the running binary
pub const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tool configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub update_check: UpdateCheckConfig,
}

/// Update check configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateCheckConfig {
    /// When false the check is skipped entirely
    pub enabled: bool,
    /// Base URL of the NuGet flat container
    pub feed_url: String,
    /// Package identifier to look up
    pub package_id: String,
    /// Feed request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for UpdateCheckConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            feed_url: DEFAULT_FEED_URL.to_string(),
            package_id: PACKAGE_ID.to_string(),
            timeout_ms: FETCH_TIMEOUT_MS,
        }
    }
}

impl UpdateCheckConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Load the configuration file at `path`.
///
/// A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Returns the path to the data directory for a365.
/// Uses $XDG_DATA_HOME/a365 if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/a365,
/// or ./a365 if neither is available.
pub fn data_dir() -> PathBuf {
    dir_with_env(
        std::env::var("XDG_DATA_HOME").ok(),
        dirs::home_dir(),
        ".local/share",
    )
}

/// Returns the path to the config directory for a365.
/// Uses $XDG_CONFIG_HOME/a365, then ~/.config/a365, then ./a365.
pub fn config_dir() -> PathBuf {
    dir_with_env(
        std::env::var("XDG_CONFIG_HOME").ok(),
        dirs::home_dir(),
        ".config",
    )
}

/// Returns the path to the config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("a365.log")
}

fn dir_with_env(xdg_home: Option<String>, home_dir: Option<PathBuf>, home_relative: &str) -> PathBuf {
    let base = xdg_home
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(home_relative)))
        .unwrap_or_else(|| PathBuf::from("."));

    base.join("a365")
}
