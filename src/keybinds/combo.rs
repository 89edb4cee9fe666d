//! Decoding of key combo tokens like `Mod+Shift+Q` or `XF86AudioRaiseVolume`

use std::fmt;

/// Modifier spellings accepted in niri combos, mapped to their display names
///
/// Tokens not listed here pass through unchanged.
const MODIFIER_NAMES: &[(&str, &str)] = &[
    ("Mod", "Super"),
    ("Super", "Super"),
    ("Alt", "Alt"),
    ("Shift", "Shift"),
    ("Ctrl", "Ctrl"),
];

/// Prefix shared by multimedia and hardware keys
const VENDOR_KEY_PREFIX: &str = "XF86";

/// Replace-all substitutions for vendor keys, applied in order
///
/// Later entries see the output of earlier ones: the brightness prefix is
/// shortened before `Up`/`Down` become `+`/`-`.
const VENDOR_KEY_REWRITES: &[(&str, &str)] = &[
    ("XF86Audio", ""),
    ("RaiseVolume", "Vol+"),
    ("LowerVolume", "Vol-"),
    ("XF86MonBrightness", "Brightness"),
    ("Up", "+"),
    ("Down", "-"),
];

/// A decoded combo: modifiers in source order plus the base key
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub mods: Vec<String>,
    pub key: String,
}

impl KeyCombo {
    /// Create a combo from modifier names and a key
    pub fn new<M, S>(mods: M, key: impl Into<String>) -> Self
    where
        M: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mods: mods.into_iter().map(Into::into).collect(),
            key: key.into(),
        }
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in &self.mods {
            write!(f, "{}+", m)?;
        }
        write!(f, "{}", self.key)
    }
}

/// Decode a combo token into modifiers and a display-friendly base key
///
/// The last `+`-separated segment is the key; every earlier segment is a
/// modifier, renamed through [`MODIFIER_NAMES`].
pub fn decode_combo(token: &str) -> KeyCombo {
    let mut parts: Vec<&str> = token.split('+').collect();
    // split always yields at least one segment
    let key = parts.pop().unwrap_or_default();

    let mods = parts.into_iter().map(modifier_name).collect();

    KeyCombo {
        mods,
        key: rewrite_key(key),
    }
}

fn modifier_name(token: &str) -> String {
    MODIFIER_NAMES
        .iter()
        .find(|(from, _)| *from == token)
        .map(|(_, to)| *to)
        .unwrap_or(token)
        .to_string()
}

/// Shorten vendor key names (`XF86AudioLowerVolume` → `Vol-`)
fn rewrite_key(key: &str) -> String {
    if !key.starts_with(VENDOR_KEY_PREFIX) {
        return key.to_string();
    }

    VENDOR_KEY_REWRITES
        .iter()
        .fold(key.to_string(), |acc, (from, to)| acc.replace(from, to))
}
