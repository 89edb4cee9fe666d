//! Picking the most useful temperature input inside one hwmon directory

use std::fs;
use std::path::{Path, PathBuf};

/// Label fragments and their scores; the first fragment found decides
const LABEL_SCORES: &[(&str, u32)] = &[
    ("package", 20),
    ("tdie", 20),
    // Tctl is often offset, but better than a random core
    ("tctl", 15),
    ("edge", 15),
    ("junction", 10),
    ("composite", 10),
    ("core", 5),
];

/// Score for an input with no recognized label
const DEFAULT_SCORE: u32 = 1;

/// Read a sysfs attribute, returning an empty string when it can't be read
pub(crate) fn read_attr(path: &Path) -> String {
    fs::read_to_string(path)
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// `temp1_input` → `temp1_label`
pub(crate) fn label_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().replace("_input", "_label"))
        .unwrap_or_default();
    input.with_file_name(name)
}

/// Lower-cased label of a temperature input, empty if it has none
pub(crate) fn input_label(input: &Path) -> String {
    read_attr(&label_path(input)).to_lowercase()
}

/// Score a lower-cased label
pub fn label_score(label: &str) -> u32 {
    LABEL_SCORES
        .iter()
        .find(|(fragment, _)| label.contains(fragment))
        .map(|(_, score)| *score)
        .unwrap_or(DEFAULT_SCORE)
}

/// Whether an input currently reports a positive reading
fn has_reading(input: &Path) -> bool {
    read_attr(input)
        .parse::<i64>()
        .map(|millideg| millideg > 0)
        .unwrap_or(false)
}

/// `temp*_input` files in a hwmon directory, sorted by name
fn temp_inputs(hwmon_dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(hwmon_dir) else {
        return Vec::new();
    };

    let mut inputs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.starts_with("temp") && n.ends_with("_input"))
                .unwrap_or(false)
        })
        .collect();
    inputs.sort();
    inputs
}

/// Find the highest-scoring temperature input with a valid reading
///
/// Inputs that are empty, non-numeric or not positive are ignored. Ties go to
/// the input that sorts first.
pub fn find_best_temp_input(hwmon_dir: &Path) -> Option<PathBuf> {
    let mut best: Option<(PathBuf, u32)> = None;

    for input in temp_inputs(hwmon_dir) {
        if !has_reading(&input) {
            tracing::trace!("Skipping {}: no valid reading", input.display());
            continue;
        }

        let score = label_score(&input_label(&input));
        if best.as_ref().map_or(true, |(_, top)| score > *top) {
            best = Some((input, score));
        }
    }

    best.map(|(path, _)| path)
}
