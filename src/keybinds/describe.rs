//! Human-readable labels for niri actions
//!
//! Labels are resolved by walking ordered rule lists; the first rule that
//! produces a label wins. When nothing matches, the raw action is shown,
//! truncated to [`MAX_RAW_LABEL_CHARS`].

use std::sync::LazyLock;

use regex::Regex;

/// Longest raw action shown verbatim before it is cut and given an ellipsis
pub const MAX_RAW_LABEL_CHARS: usize = 40;

/// Built-in niri actions with a fixed label
const DIRECT_ACTIONS: &[(&str, &str)] = &[
    ("toggle-overview", "Niri Overview"),
    ("quit", "Quit Niri"),
    ("toggle-keyboard-shortcuts-inhibit", "Toggle shortcuts inhibit"),
    ("close-window", "Close window"),
    ("maximize-column", "Maximize column"),
    ("fullscreen-window", "Fullscreen"),
    ("toggle-window-floating", "Toggle floating"),
    ("focus-column-left", "Focus left"),
    ("focus-column-right", "Focus right"),
    ("focus-window-up", "Focus up"),
    ("focus-window-down", "Focus down"),
    ("move-column-left", "Move left"),
    ("move-column-right", "Move right"),
    ("move-window-up", "Move up"),
    ("move-window-down", "Move down"),
    ("screenshot", "Screenshot"),
    ("screenshot-screen", "Screenshot screen"),
    ("screenshot-window", "Screenshot window"),
];

/// Shell IPC calls, keyed by `(target, function)`
const IPC_CALLS: &[((&str, &str), &str)] = &[
    (("altSwitcher", "next"), "Next window"),
    (("altSwitcher", "previous"), "Previous window"),
    (("overlay", "toggle"), "ii Overlay"),
    (("overview", "toggle"), "ii Overview"),
    (("clipboard", "toggle"), "Clipboard"),
    (("lock", "activate"), "Lock Screen"),
    (("region", "screenshot"), "Screenshot region"),
    (("region", "ocr"), "OCR region"),
    (("region", "search"), "Reverse image search"),
    (("wallpaperSelector", "toggle"), "Wallpaper Selector"),
    (("settings", "open"), "Settings"),
    (("cheatsheet", "toggle"), "Cheatsheet"),
    (("panelFamily", "cycle"), "Cycle panel style"),
];

const TERMINALS: &[&str] = &["foot", "kitty", "alacritty", "wezterm", "ghostty"];

const FILE_MANAGERS: &[&str] = &["dolphin", "nautilus", "thunar", "nemo", "pcmanfm"];

const VOLUME_TOOL: &str = "wpctl";

const BRIGHTNESS_TOOLS: &[&str] = &["brightnessctl", "light"];

const SPAWN_KEYWORD: &str = "spawn";

static WORKSPACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(focus-workspace|move-column-to-workspace)\s+(\d+)").expect("Invalid regex")
});

static IPC_CALL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"ipc.*call.*"(\w+)".*"(\w+)""#).expect("Invalid regex"));

static SPAWN_PROGRAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"spawn\s+"([^"]+)""#).expect("Invalid regex"));

/// A labeling rule: returns `Some(label)` when it recognizes the action
type LabelRule = fn(&str) -> Option<String>;

/// Top-level rules, in priority order
const ACTION_RULES: &[LabelRule] = &[direct_action, workspace_action, spawn_action];

/// Rules for `spawn` actions, in priority order
const SPAWN_RULES: &[LabelRule] = &[
    ipc_call,
    terminal,
    file_manager,
    volume,
    brightness,
    close_window_script,
    spawned_program,
];

/// Derive a short label for an action body
///
/// Pure and deterministic: the same action always yields the same label.
pub fn describe_action(action: &str) -> String {
    let action = action.trim();
    first_label(ACTION_RULES, action).unwrap_or_else(|| truncate_raw(action))
}

fn first_label(rules: &[LabelRule], action: &str) -> Option<String> {
    rules.iter().find_map(|rule| rule(action))
}

fn direct_action(action: &str) -> Option<String> {
    DIRECT_ACTIONS
        .iter()
        .find(|(name, _)| *name == action)
        .map(|(_, label)| label.to_string())
}

fn workspace_action(action: &str) -> Option<String> {
    let caps = WORKSPACE_RE.captures(action)?;
    let verb = if caps[1].contains("focus") {
        "Focus"
    } else {
        "Move to"
    };
    Some(format!("{} workspace {}", verb, &caps[2]))
}

fn spawn_action(action: &str) -> Option<String> {
    if !action.starts_with(SPAWN_KEYWORD) {
        return None;
    }
    first_label(SPAWN_RULES, action)
}

fn ipc_call(action: &str) -> Option<String> {
    let caps = IPC_CALL_RE.captures(action)?;
    let (target, function) = (&caps[1], &caps[2]);

    let label = IPC_CALLS
        .iter()
        .find(|((t, f), _)| *t == target && *f == function)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| format!("{} {}", target, function));
    Some(label)
}

fn terminal(action: &str) -> Option<String> {
    contains_any(action, TERMINALS).then(|| "Terminal".to_string())
}

fn file_manager(action: &str) -> Option<String> {
    contains_any(action, FILE_MANAGERS).then(|| "File manager".to_string())
}

/// `wpctl` calls; falls through when neither volume nor mute is recognized
fn volume(action: &str) -> Option<String> {
    if !action.contains(VOLUME_TOOL) {
        return None;
    }

    if action.contains("set-volume") {
        if action.contains('+') {
            return Some("Volume up".to_string());
        }
        if action.contains('-') {
            return Some("Volume down".to_string());
        }
    }

    action
        .contains("set-mute")
        .then(|| "Mute toggle".to_string())
}

fn brightness(action: &str) -> Option<String> {
    if !contains_any(action, BRIGHTNESS_TOOLS) {
        return None;
    }

    let label = if action.contains('+') || action.contains("inc") {
        "Brightness up"
    } else {
        "Brightness down"
    };
    Some(label.to_string())
}

fn close_window_script(action: &str) -> Option<String> {
    action
        .contains("close-window")
        .then(|| "Close window".to_string())
}

fn spawned_program(action: &str) -> Option<String> {
    SPAWN_PROGRAM_RE
        .captures(action)
        .map(|caps| caps[1].to_string())
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

fn truncate_raw(action: &str) -> String {
    match action.char_indices().nth(MAX_RAW_LABEL_CHARS) {
        Some((cut, _)) => format!("{}...", &action[..cut]),
        None => action.to_string(),
    }
}
