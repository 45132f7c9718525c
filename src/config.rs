//! Fixed settings for the dedup-and-export flow.

use std::path::PathBuf;

/// Extensions offered by the file picker and accepted by the importer.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "xlsb", "ods"];

pub const EXPORT_FILE_PREFIX: &str = "ketqua";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformConfig {
    /// Rows copied verbatim from the top of every sheet.
    pub header_rows: usize,
    /// Columns (0-based) whose values form the duplicate key.
    pub key_columns: Vec<usize>,
    /// Columns (0-based) normalized to dates on surviving rows.
    pub date_columns: Vec<usize>,
    pub key_separator: String,
    /// Stand-in for an empty key column.
    pub empty_key_placeholder: String,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            header_rows: 6,
            key_columns: vec![6, 7, 8],
            date_columns: vec![1, 8],
            key_separator: "__".to_string(),
            empty_key_placeholder: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub file_prefix: String,
    pub output_dir: PathBuf,
}

impl ExportConfig {
    pub fn new(output_dir: PathBuf) -> Self {
        Self {
            file_prefix: EXPORT_FILE_PREFIX.to_string(),
            output_dir,
        }
    }
}
