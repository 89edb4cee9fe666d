//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use niri_keybinds::keybinds::{Cheatsheet, KeybindEntry};

/// Sample niri config with every category represented
pub const SAMPLE_CONFIG: &str = include_str!("../../samples/config.kdl");

/// Wrap bind lines in a minimal config document
pub fn binds_doc(lines: &[&str]) -> String {
    let mut doc = String::from("input {\n    keyboard { numlock }\n}\n\nbinds {\n");
    for line in lines {
        doc.push_str("    ");
        doc.push_str(line);
        doc.push('\n');
    }
    doc.push_str("}\n");
    doc
}

/// All entries in output order, paired with their category name
pub fn entries(sheet: &Cheatsheet) -> Vec<(&str, &KeybindEntry)> {
    sheet
        .children
        .iter()
        .flat_map(|group| group.keybinds().map(move |k| (group.name.as_str(), k)))
        .collect()
}

/// Category name of the only keybind in a single-bind document
pub fn only_category(sheet: &Cheatsheet) -> &str {
    let all = entries(sheet);
    assert_eq!(all.len(), 1, "expected exactly one keybind, got {:?}", all);
    all[0].0
}

/// Write `content` to `dir/relative`, creating parent directories
pub fn write_file(dir: &Path, relative: &str, content: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}
