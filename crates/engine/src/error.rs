use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The file extension has no entry in the language table.
    #[error("{path}: unsupported file type")]
    UnsupportedFileType { path: PathBuf },

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Walk error: {0}")]
    Traversal(#[from] ignore::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl EngineError {
    /// Unsupported files are skipped by the walker rather than reported.
    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedFileType { .. })
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
