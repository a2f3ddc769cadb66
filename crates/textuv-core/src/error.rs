//! Error types for scaffolding

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// Target path exists and is not empty; nothing has been written
    #[error("Target directory already exists and is not empty: {}", path.display())]
    TargetExists { path: PathBuf },

    #[error("Failed to inspect {}: {source}", path.display())]
    Inspect {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to determine current directory: {0}")]
    CurrentDir(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;

impl ScaffoldError {
    /// True when the error is the user-facing "target not empty" refusal
    pub fn is_target_exists(&self) -> bool {
        matches!(self, ScaffoldError::TargetExists { .. })
    }
}
