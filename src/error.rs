use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Please select at least one Word document.")]
    NoFilesSelected,

    #[error("File not found: {}", .0.display())]
    SourceMissing(PathBuf),

    #[error("File is empty: {}", .0.display())]
    SourceEmpty(PathBuf),

    #[error("Cannot create output folder {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Conversion engine unavailable: {0}")]
    EngineUnavailable(String),

    #[error("Conversion engine failed: {0}")]
    EngineFailed(String),

    #[error("Conversion engine timed out after {0}s")]
    EngineTimeout(u64),

    #[error("Conversion engine produced no output for {}", .0.display())]
    NoOutput(PathBuf),

    #[error("{failed} of {total} files failed to convert")]
    BatchIncomplete { failed: usize, total: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Common(#[from] word_pdf_common::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
