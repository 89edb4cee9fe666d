//! Locates a named top-level block (`binds { ... }`) in a config document
//!
//! The keyword search is purely textual: occurrences inside comments or string
//! literals are not skipped. A document that mentions `binds {` in a comment
//! before the real block will extract the commented one.

use crate::error::{CheatsheetError, Result};

/// Name of the niri block that holds keybinds
pub const BINDS_BLOCK: &str = "binds";

/// Return the text between `name {` and its matching `}`, braces excluded
///
/// Nested braces are balanced by depth counting, so inner blocks do not end
/// the match early. A missing keyword or an unterminated block yields
/// [`CheatsheetError::BlockNotFound`].
pub fn extract_block<'a>(document: &'a str, name: &str) -> Result<&'a str> {
    let start = find_block_open(document, name).ok_or(CheatsheetError::BlockNotFound)?;
    let end = find_matching_close(document, start).ok_or(CheatsheetError::BlockNotFound)?;
    Ok(&document[start..end])
}

/// Byte offset just past the opening brace of the first `name {` occurrence
fn find_block_open(document: &str, name: &str) -> Option<usize> {
    if name.is_empty() {
        return None;
    }

    let needs_boundary = name.chars().next().is_some_and(is_word_char);

    for (pos, _) in document.match_indices(name) {
        if needs_boundary {
            let preceded_by_word = document[..pos].chars().next_back().is_some_and(is_word_char);
            if preceded_by_word {
                continue;
            }
        }

        let rest = &document[pos + name.len()..];
        let after_ws = rest.trim_start();
        if after_ws.starts_with('{') {
            let brace = pos + name.len() + (rest.len() - after_ws.len());
            return Some(brace + 1);
        }
    }

    None
}

/// Byte offset of the `}` that closes a block opened just before `start`
fn find_matching_close(document: &str, start: usize) -> Option<usize> {
    let mut depth = 1usize;
    for (offset, byte) in document.as_bytes()[start..].iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + offset);
                }
            }
            _ => {}
        }
    }
    None
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
