//! User preferences for niri-keybinds
//!
//! Read from `~/.config/niri-keybinds/config.yaml`. Every field is optional:
//!
//! ```yaml
//! niri_config: ~/dotfiles/niri/config.kdl
//! pretty: true
//! sysfs_root: /sys
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration loaded once at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Niri config to read instead of the XDG default
    #[serde(default)]
    pub niri_config: Option<PathBuf>,

    /// Pretty-print the JSON cheatsheet
    #[serde(default)]
    pub pretty: bool,

    /// Where sysfs is mounted, for sensor detection
    #[serde(default = "default_sysfs_root")]
    pub sysfs_root: PathBuf,
}

fn default_sysfs_root() -> PathBuf {
    PathBuf::from(crate::sensors::SYSFS_ROOT)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            niri_config: None,
            pretty: false,
            sysfs_root: default_sysfs_root(),
        }
    }
}

impl AppConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::parse(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse config YAML. An empty document yields the defaults.
    pub fn parse(yaml: &str) -> Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    /// The niri config to read: explicit override, else the XDG default
    pub fn niri_config_path(&self) -> Option<PathBuf> {
        self.niri_config
            .as_deref()
            .map(expand_home)
            .or_else(crate::config_paths::niri_config_file)
    }
}

/// Expand a leading `~/` to the home directory
fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
