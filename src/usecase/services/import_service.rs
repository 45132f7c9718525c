use std::path::Path;
use std::sync::Arc;

use crate::config::ACCEPTED_EXTENSIONS;
use crate::domain::entities::workbook::LoadedWorkbook;
use crate::usecase::ports::workbook_io::{CodecError, WorkbookSource};

pub struct ImportService {
    source: Arc<dyn WorkbookSource>,
}

impl ImportService {
    pub fn new(source: Arc<dyn WorkbookSource>) -> Self {
        Self { source }
    }

    /// Reads the whole file, then parses it.
    pub fn load(&self, path: &Path) -> Result<LoadedWorkbook, CodecError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_ascii_lowercase())
            .unwrap_or_default();
        if !ACCEPTED_EXTENSIONS.contains(&ext.as_str()) {
            return Err(CodecError::UnsupportedExtension(ext));
        }

        let bytes = std::fs::read(path).map_err(|source| CodecError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let byte_len = bytes.len();
        let workbook = self.source.parse(bytes)?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        tracing::info!(
            file = %file_name,
            bytes = byte_len,
            sheets = workbook.sheets.len(),
            "workbook loaded"
        );

        Ok(LoadedWorkbook {
            file_name,
            source_path: path.to_path_buf(),
            workbook,
        })
    }
}
