//! Configuration system tests
//!
//! Tests for config paths and the YAML app config.

mod common;

use std::path::PathBuf;

use common::write_file;
use niri_keybinds::config::AppConfig;
use niri_keybinds::config_paths;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_returns_some() {
    assert!(config_paths::config_dir().is_some());
}

#[test]
fn test_config_dir_contains_app_name() {
    let dir = config_paths::config_dir().unwrap();
    assert!(dir.to_string_lossy().contains("niri-keybinds"));
}

#[test]
fn test_config_file_ends_with_yaml() {
    let path = config_paths::config_file().unwrap();
    assert!(path.to_string_lossy().ends_with("config.yaml"));
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    let config = config_paths::config_dir().unwrap();
    let logs = config_paths::logs_dir().unwrap();
    assert!(logs.starts_with(&config));
}

#[test]
fn test_niri_config_file_location() {
    let path = config_paths::niri_config_file().unwrap();
    assert!(path.ends_with("niri/config.kdl"), "got {}", path.display());
}

// ========================================================================
// App Config Tests
// ========================================================================

#[test]
fn test_load_from_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_from(&dir.path().join("config.yaml"));
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "config.yaml",
        "niri_config: /etc/niri/config.kdl\npretty: true\nsysfs_root: /tmp/fake-sys\n",
    );

    let config = AppConfig::load_from(&path);
    assert_eq!(config.niri_config, Some(PathBuf::from("/etc/niri/config.kdl")));
    assert!(config.pretty);
    assert_eq!(config.sysfs_root, PathBuf::from("/tmp/fake-sys"));
    assert_eq!(
        config.niri_config_path(),
        Some(PathBuf::from("/etc/niri/config.kdl"))
    );
}

#[test]
fn test_load_from_invalid_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "config.yaml", "pretty: {{{{");
    assert_eq!(AppConfig::load_from(&path), AppConfig::default());
}

#[test]
fn test_config_serialize_deserialize() {
    let config = AppConfig {
        niri_config: Some(PathBuf::from("/x/config.kdl")),
        pretty: true,
        ..Default::default()
    };
    let yaml = serde_yaml::to_string(&config).unwrap();
    let parsed: AppConfig = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_default_niri_config_path_falls_back_to_xdg() {
    let config = AppConfig::default();
    assert_eq!(config.niri_config_path(), config_paths::niri_config_file());
}
