//! niri-keybinds - keybind cheatsheet extraction for niri
//!
//! This crate reads a niri `config.kdl`, extracts the `binds` block and turns
//! each keybind into a labeled, categorized cheatsheet entry. It also ships a
//! small sysfs scanner that finds CPU/GPU temperature inputs.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod keybinds;
pub mod sensors;
pub mod tracing;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::CheatsheetError;
pub use keybinds::{build_cheatsheet, load_cheatsheet, parse_keybinds, Category, Cheatsheet};
pub use sensors::SensorPaths;
