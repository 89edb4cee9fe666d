//! Centralized paths for niri-keybinds
//!
//! Our own files live under:
//! - Unix: `~/.config/niri-keybinds/` (or `$XDG_CONFIG_HOME/niri-keybinds/`)
//! - Windows: `%APPDATA%\niri-keybinds\`
//!
//! The niri config we read is `$XDG_CONFIG_HOME/niri/config.kdl`, falling back
//! to `~/.config/niri/config.kdl`.
//!
//! This module is the single source of truth for paths.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "niri-keybinds";
const NIRI_DIR: &str = "niri";
const NIRI_CONFIG: &str = "config.kdl";

/// Log file prefix; the appender adds a `.YYYY-MM-DD` suffix
pub const LOG_FILE_PREFIX: &str = "niri-keybinds.log";

/// The XDG config home: `$XDG_CONFIG_HOME`, else `~/.config`
fn xdg_config_home() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
}

/// Base config directory for niri-keybinds
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/niri-keybinds`
///   - Else: `~/.config/niri-keybinds`
///
/// Windows:
///   - `%APPDATA%\niri-keybinds`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        xdg_config_home().map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/niri-keybinds/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/niri-keybinds/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// `~/.config/niri/config.kdl`, the niri config read by default
pub fn niri_config_file() -> Option<PathBuf> {
    xdg_config_home().map(|config| config.join(NIRI_DIR).join(NIRI_CONFIG))
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Ensure the base config dir exists, returning it
pub fn ensure_config_dir() -> Result<PathBuf, String> {
    let dir = config_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&dir)?;
    Ok(dir)
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = ensure_config_dir()?.join("logs");
    ensure_dir(&logs)?;
    Ok(logs)
}
