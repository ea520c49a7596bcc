use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export cancelled")]
    Cancelled,
    #[error("file saving is unavailable: {0}")]
    Unavailable(String),
    #[error("failed to encode csv: {0}")]
    Encode(#[from] csv::Error),
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),
}

/// Host capability that persists an exported file somewhere the user can reach it.
pub trait FileSaver: Send + Sync {
    fn save(&self, file_name: &str, contents: &[u8]) -> Result<PathBuf, ExportError>;
}
