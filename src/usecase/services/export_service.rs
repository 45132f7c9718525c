use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::config::TransformConfig;
use crate::domain::entities::workbook::LoadedWorkbook;
use crate::usecase::ports::workbook_io::{CodecError, WorkbookSink};
use crate::usecase::transform::{transform_workbook, SheetReport};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub file_name: String,
    pub path: PathBuf,
    pub sheets: Vec<SheetReport>,
}

impl ExportReport {
    pub fn dropped_rows(&self) -> usize {
        self.sheets.iter().map(|s| s.dropped_rows).sum()
    }
}

/// `YYYYMMDDHHMMSS` of the given wall-clock time.
pub fn export_timestamp(now: NaiveDateTime) -> String {
    now.format("%Y%m%d%H%M%S").to_string()
}

pub fn export_file_name(prefix: &str, now: NaiveDateTime) -> String {
    format!("{prefix}_{}.xlsx", export_timestamp(now))
}

pub struct ExportService {
    sink: Arc<dyn WorkbookSink>,
    transform: TransformConfig,
    file_prefix: String,
}

impl ExportService {
    pub fn new(sink: Arc<dyn WorkbookSink>, transform: TransformConfig, file_prefix: String) -> Self {
        Self {
            sink,
            transform,
            file_prefix,
        }
    }

    /// Transforms every sheet of `loaded` and hands the result to the sink.
    /// `loaded` is only borrowed, so a failed export can be retried.
    pub fn export(
        &self,
        loaded: &LoadedWorkbook,
        now: NaiveDateTime,
    ) -> Result<ExportReport, CodecError> {
        let (output, sheets) = transform_workbook(&loaded.workbook, &self.transform);
        let file_name = export_file_name(&self.file_prefix, now);

        let path = self.sink.write(&output, &file_name).inspect_err(|err| {
            tracing::error!(file = %file_name, error = %err, "export failed");
        })?;

        let report = ExportReport {
            file_name,
            path,
            sheets,
        };
        tracing::info!(
            source = %loaded.file_name,
            path = %report.path.display(),
            dropped = report.dropped_rows(),
            "export written"
        );
        Ok(report)
    }
}
