//! Host configuration.
//!
//! Loaded from `~/.config/vitrine/config.toml`. Missing sections fall
//! back to defaults thanks to `#[serde(default)]`. Only ambient
//! settings live here; window state itself is never persisted.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::hittest::{HitTestMode, TraceChannel};
use crate::log::LogConfig;

/// Top-level configuration for Vitrine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File logging settings.
    pub logging: LogConfig,
    /// Initial hit-testing behavior.
    pub hittest: HitTestConfig,
}

/// Hit-test scheduler defaults applied at engine construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HitTestConfig {
    /// Whether hit-testing starts enabled.
    pub enabled: bool,
    /// Detection mode: "none" or "game_raycast".
    pub mode: HitTestMode,
    /// Raycast channel id handed to the scene probe.
    pub channel: TraceChannel,
}

impl Default for HitTestConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            mode: HitTestMode::None,
            channel: 0,
        }
    }
}

impl Config {
    /// Clamps values to safe ranges.
    pub fn validate(&mut self) {
        self.logging.max_file_mb = self.logging.max_file_mb.clamp(1, 1024);
    }
}

/// Returns the config directory: `~/.config/vitrine/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("vitrine"))
}

/// Returns the config file path: `~/.config/vitrine/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Tries to load and parse `config.toml`.
///
/// Returns `Ok(Config)` on success, or an error string describing
/// what went wrong (IO error, parse error, etc.).
pub fn try_load() -> Result<Config, String> {
    let path = config_path().ok_or("could not determine config path")?;
    let content = std::fs::read_to_string(&path).map_err(|e| format!("{}: {e}", path.display()))?;
    let mut config: Config =
        toml::from_str(&content).map_err(|e| format!("{}: {e}", path.display()))?;
    config.validate();
    Ok(config)
}

/// Loads the configuration from disk, falling back to defaults.
///
/// Non-existent files silently return defaults; other errors are
/// reported on stderr before defaulting.
pub fn load() -> Config {
    match try_load() {
        Ok(config) => config,
        Err(e) if is_file_not_found(&e) => Config::default(),
        Err(e) => {
            eprintln!("Warning: {e}");
            Config::default()
        }
    }
}

/// Returns true if the error message indicates a missing file.
fn is_file_not_found(e: &str) -> bool {
    e.contains("cannot find the path")
        || e.contains("The system cannot find")
        || e.contains("No such file")
}

/// Generates the default `config.toml` contents with explanatory
/// comments. Used by `vitrine init` to create a starter file.
pub fn generate_config() -> String {
    r##"# Vitrine configuration
# Location: ~/.config/vitrine/config.toml

[logging]
# Enable file logging to ~/.config/vitrine/logs/vitrine.log.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in MB before rotation.
max_file_mb = 10

[hittest]
# Whether cursor hit-testing starts enabled.
enabled = false
# Detection mode: "none" or "game_raycast".
mode = "none"
# Raycast channel id passed to the host's scene probe.
channel = 0
"##
    .to_string()
}
