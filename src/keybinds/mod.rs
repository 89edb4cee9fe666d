//! Keybind extraction for the niri cheatsheet
//!
//! This module turns a niri `config.kdl` into a categorized cheatsheet:
//! - Finds the `binds { ... }` block, balancing nested braces
//! - Splits each line into a combo token and an action body
//! - Decodes combos into display modifiers and keys
//! - Labels actions and sorts them into a fixed set of categories
//!
//! # Architecture
//!
//! ```text
//! &str → extract_block() → tokenize_line() → decode_combo() + describe_action()
//!      → categorize() → assemble() → Cheatsheet
//! ```
//!
//! Everything except [`load_cheatsheet`] is pure: no I/O and no shared state,
//! so the same input always yields the same output.
//!
//! # Usage
//!
//! ```ignore
//! let sheet = build_cheatsheet(&content, "~/.config/niri/config.kdl");
//! println!("{}", serde_json::to_string(&sheet)?);
//! ```

mod assemble;
mod block;
mod category;
mod combo;
mod describe;
mod line;

use std::path::Path;

pub use assemble::{assemble, CategoryGroup, Cheatsheet, KeybindEntry, KeybindList};
pub use block::{extract_block, BINDS_BLOCK};
pub use category::{categorize, Category};
pub use combo::{decode_combo, KeyCombo};
pub use describe::{describe_action, MAX_RAW_LABEL_CHARS};
pub use line::{tokenize_line, BindLine};

use crate::error::{CheatsheetError, Result};

/// A decoded keybind with its derived label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub combo: KeyCombo,
    /// Action body as written in the config
    pub action: String,
    pub label: String,
}

impl Keybind {
    /// Decode and label a tokenized line
    pub fn from_line(line: BindLine<'_>) -> Self {
        Self {
            combo: decode_combo(line.combo),
            action: line.action.to_string(),
            label: describe_action(line.action),
        }
    }

    pub fn category(&self) -> Category {
        categorize(&self.label, &self.action)
    }
}

/// A keybind together with the category it is listed under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorizedKeybind {
    pub keybind: Keybind,
    pub category: Category,
}

impl From<Keybind> for CategorizedKeybind {
    fn from(keybind: Keybind) -> Self {
        let category = keybind.category();
        Self { keybind, category }
    }
}

/// Extract and categorize every keybind in a config document
///
/// Fails only when the binds block is missing, unterminated, or empty. Lines
/// that are not keybinds are skipped.
pub fn parse_keybinds(document: &str) -> Result<Vec<CategorizedKeybind>> {
    let block = extract_block(document, BINDS_BLOCK)?;
    if block.is_empty() {
        return Err(CheatsheetError::BlockNotFound);
    }

    let mut keybinds = Vec::new();
    for (idx, raw) in block.lines().enumerate() {
        let Some(line) = tokenize_line(raw) else {
            continue;
        };

        let bind = CategorizedKeybind::from(Keybind::from_line(line));
        tracing::trace!(
            line = idx,
            combo = line.combo,
            label = %bind.keybind.label,
            category = %bind.category,
            "parsed keybind"
        );
        keybinds.push(bind);
    }

    tracing::debug!("Parsed {} keybinds from binds block", keybinds.len());
    Ok(keybinds)
}

/// Build the cheatsheet for a config document
///
/// `config_path` is only echoed back in the output. A missing binds block
/// produces the error record instead of a partial cheatsheet.
pub fn build_cheatsheet(document: &str, config_path: &str) -> Cheatsheet {
    match parse_keybinds(document) {
        Ok(keybinds) => assemble(keybinds, config_path),
        Err(e) => {
            tracing::warn!("No keybinds in {}: {}", config_path, e);
            Cheatsheet::from_error(&e)
        }
    }
}

/// Read a config file from disk and build its cheatsheet
///
/// Missing or unreadable files produce an error record rather than failing.
pub fn load_cheatsheet(path: &Path) -> Cheatsheet {
    match read_config(path) {
        Ok(content) => build_cheatsheet(&content, &path.display().to_string()),
        Err(e) => {
            tracing::warn!("{}", e);
            Cheatsheet::from_error(&e)
        }
    }
}

fn read_config(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(CheatsheetError::ConfigNotFound(path.to_path_buf()));
    }

    std::fs::read_to_string(path).map_err(|e| CheatsheetError::Read {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
