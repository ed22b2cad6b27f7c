//! Error types for module scaffolding

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The destination file is already on disk; nothing was written to it
    #[error("file already exists: {}", path.display())]
    FileExists { path: PathBuf },

    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("module name '{raw}' is empty after removing separators")]
    EmptyName { raw: String },
}

impl ScaffoldError {
    /// Whether this error is a collision with an existing file
    pub fn is_collision(&self) -> bool {
        matches!(self, ScaffoldError::FileExists { .. })
    }
}
