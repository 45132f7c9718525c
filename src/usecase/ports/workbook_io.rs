use std::path::PathBuf;

use thiserror::Error;

use crate::domain::entities::output::OutputWorkbook;
use crate::domain::entities::workbook::Workbook;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("unsupported file type: {0}")]
    UnsupportedExtension(String),

    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse workbook: {0}")]
    Parse(String),

    #[error("failed to serialize workbook: {0}")]
    Serialize(String),

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Spreadsheet bytes to [`Workbook`].
pub trait WorkbookSource: Send + Sync {
    fn parse(&self, bytes: Vec<u8>) -> Result<Workbook, CodecError>;
}

/// Stores an assembled workbook under `file_name` and returns where it went.
pub trait WorkbookSink: Send + Sync {
    fn write(&self, workbook: &OutputWorkbook, file_name: &str) -> Result<PathBuf, CodecError>;
}
