//! Errors reported by the cheatsheet pipeline
//!
//! Only top-level failures live here. Unparseable lines and unknown tokens are
//! absorbed by fallbacks inside the pipeline and never surface as errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when building a cheatsheet
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheatsheetError {
    /// The binds block is absent, empty, or never closed
    #[error("No binds block found")]
    BlockNotFound,

    #[error("Config not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Failed to read {}: {reason}", .path.display())]
    Read { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, CheatsheetError>;
