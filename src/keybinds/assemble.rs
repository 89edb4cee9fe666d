//! Grouping of categorized keybinds into the cheatsheet output tree
//!
//! The output mirrors what the cheatsheet UI expects:
//!
//! ```text
//! { children: [ { name, children: [ { keybinds: [ { mods, key, comment } ] } ] } ], configPath }
//! { error, children: [] }
//! ```

use serde::Serialize;

use super::category::Category;
use super::CategorizedKeybind;
use crate::error::CheatsheetError;

/// Root of the cheatsheet output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cheatsheet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub children: Vec<CategoryGroup>,
    #[serde(rename = "configPath", skip_serializing_if = "Option::is_none")]
    pub config_path: Option<String>,
}

impl Cheatsheet {
    /// The error record: a message and no categories
    pub fn from_error(err: &CheatsheetError) -> Self {
        Self {
            error: Some(err.to_string()),
            children: Vec::new(),
            config_path: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Total keybinds across every category
    pub fn keybind_count(&self) -> usize {
        self.children
            .iter()
            .flat_map(|group| &group.children)
            .map(|list| list.keybinds.len())
            .sum()
    }

    /// Find a category group by its section title
    pub fn group(&self, name: &str) -> Option<&CategoryGroup> {
        self.children.iter().find(|group| group.name == name)
    }
}

/// One cheatsheet section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    pub name: String,
    pub children: Vec<KeybindList>,
}

impl CategoryGroup {
    /// Iterate every keybind in this section
    pub fn keybinds(&self) -> impl Iterator<Item = &KeybindEntry> {
        self.children.iter().flat_map(|list| &list.keybinds)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeybindList {
    pub keybinds: Vec<KeybindEntry>,
}

/// A keybind as shown in the cheatsheet; the raw action is not included
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeybindEntry {
    pub mods: Vec<String>,
    pub key: String,
    pub comment: String,
}

impl From<CategorizedKeybind> for KeybindEntry {
    fn from(bind: CategorizedKeybind) -> Self {
        let keybind = bind.keybind;
        Self {
            mods: keybind.combo.mods,
            key: keybind.combo.key,
            comment: keybind.label,
        }
    }
}

/// Group keybinds by category in priority order
///
/// Keybinds keep their input order within a category, and empty categories
/// are left out.
pub fn assemble(keybinds: Vec<CategorizedKeybind>, config_path: impl Into<String>) -> Cheatsheet {
    let mut buckets: [Vec<KeybindEntry>; Category::ALL.len()] = Default::default();

    for bind in keybinds {
        buckets[bind.category.priority()].push(bind.into());
    }

    let children = Category::ALL
        .into_iter()
        .zip(buckets)
        .filter(|(_, entries)| !entries.is_empty())
        .map(|(category, entries)| CategoryGroup {
            name: category.name().to_string(),
            children: vec![KeybindList { keybinds: entries }],
        })
        .collect();

    Cheatsheet {
        error: None,
        children,
        config_path: Some(config_path.into()),
    }
}
