//! Splits a single line of the binds block into a combo token and action body

use std::sync::LazyLock;

use regex::Regex;

/// `COMBO [options] { ACTION }` where options (e.g. `repeat=false`) are discarded
static BIND_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9+_]+)\s*(?:[^{]*)?\{\s*([^}]+)\s*\}").expect("Invalid regex")
});

const COMMENT_MARKER: &str = "//";

/// A keybind declaration split into its raw parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindLine<'a> {
    /// The modifier+key token, e.g. `Mod+Shift+Q`
    pub combo: &'a str,
    /// The action body with surrounding whitespace and one trailing `;` removed
    pub action: &'a str,
}

/// Tokenize one line, returning `None` for anything that is not a keybind
///
/// Blank lines, `//` comments and lines without a trailing `{ ... }` body are
/// skipped. Action bodies are assumed to fit on one line without inner braces.
pub fn tokenize_line(line: &str) -> Option<BindLine<'_>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT_MARKER) {
        return None;
    }

    let caps = BIND_LINE_RE.captures(line)?;
    let combo = caps.get(1)?.as_str();
    let body = caps.get(2)?.as_str().trim();
    let action = body.strip_suffix(';').unwrap_or(body);

    Some(BindLine { combo, action })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_bind() {
        let bind = tokenize_line("Mod+T { spawn \"foot\"; }").unwrap();
        assert_eq!(bind.combo, "Mod+T");
        assert_eq!(bind.action, "spawn \"foot\"");
    }

    #[test]
    fn test_options_are_discarded() {
        let bind = tokenize_line("    Mod+Tab repeat=false { toggle-overview; }").unwrap();
        assert_eq!(bind.combo, "Mod+Tab");
        assert_eq!(bind.action, "toggle-overview");
    }

    #[test]
    fn test_multiple_options() {
        let bind = tokenize_line(
            "XF86AudioRaiseVolume allow-when-locked=true cooldown-ms=150 { spawn \"wpctl\"; }",
        )
        .unwrap();
        assert_eq!(bind.combo, "XF86AudioRaiseVolume");
        assert_eq!(bind.action, "spawn \"wpctl\"");
    }

    #[test]
    fn test_only_one_terminator_is_stripped() {
        let bind = tokenize_line("Mod+Q { close-window;; }").unwrap();
        assert_eq!(bind.action, "close-window;");
    }

    #[test]
    fn test_missing_terminator() {
        let bind = tokenize_line("Mod+F { fullscreen-window }").unwrap();
        assert_eq!(bind.action, "fullscreen-window");
    }

    #[test]
    fn test_blank_and_comment_lines_skip() {
        assert!(tokenize_line("").is_none());
        assert!(tokenize_line("   \t ").is_none());
        assert!(tokenize_line("// Mod+T { spawn \"foot\"; }").is_none());
    }

    #[test]
    fn test_lines_without_body_skip() {
        assert!(tokenize_line("prefer-no-csd").is_none());
        assert!(tokenize_line("Mod+T spawn foot").is_none());
        assert!(tokenize_line("}").is_none());
        assert!(tokenize_line("Mod+T {").is_none());
    }

    #[test]
    fn test_whitespace_only_body_yields_empty_action() {
        let bind = tokenize_line("Mod+X { }").unwrap();
        assert_eq!(bind.combo, "Mod+X");
        assert_eq!(bind.action, "");
    }
}
