use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing a drawing to disk
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write PNG to {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;
