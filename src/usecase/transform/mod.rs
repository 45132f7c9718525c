pub mod assembler;
pub mod dedup;

use crate::config::TransformConfig;
use crate::domain::entities::output::{OutputSheet, OutputWorkbook};
use crate::domain::entities::workbook::{Sheet, Workbook};

use assembler::assemble_sheet;
use dedup::dedup_rows;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetReport {
    pub name: String,
    pub header_rows: usize,
    pub data_rows: usize,
    pub kept_rows: usize,
    pub dropped_rows: usize,
}

pub fn transform_sheet(sheet: &Sheet, config: &TransformConfig) -> (OutputSheet, SheetReport) {
    let split = sheet.rows.len().min(config.header_rows);
    let (header, data) = sheet.rows.split_at(split);

    let outcome = dedup_rows(data, config);
    let output = assemble_sheet(&sheet.name, header, &outcome.kept);

    let report = SheetReport {
        name: sheet.name.clone(),
        header_rows: header.len(),
        data_rows: data.len(),
        kept_rows: outcome.kept.len(),
        dropped_rows: outcome.dropped,
    };
    tracing::info!(
        sheet = %report.name,
        kept = report.kept_rows,
        dropped = report.dropped_rows,
        range = ?output.range.map(|r| r.to_string()),
        "sheet transformed"
    );
    (output, report)
}

/// Transforms every sheet, keeping sheet names and order.
pub fn transform_workbook(
    workbook: &Workbook,
    config: &TransformConfig,
) -> (OutputWorkbook, Vec<SheetReport>) {
    let (sheets, reports) = workbook
        .sheets
        .iter()
        .map(|sheet| transform_sheet(sheet, config))
        .unzip();
    (OutputWorkbook { sheets }, reports)
}
