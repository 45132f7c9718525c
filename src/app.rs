use std::sync::Arc;

use chrono::Local;
use dioxus::prelude::*;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};

use crate::config::{ExportConfig, TransformConfig, ACCEPTED_EXTENSIONS};
use crate::default_export_dir;
use crate::infra::export::xlsx::XlsxDownloadSink;
use crate::infra::import::xlsx::CalamineSource;
use crate::platform::desktop::blocking::run_blocking;
use crate::ui::state::app_state::AppState;
use crate::usecase::services::export_service::ExportService;
use crate::usecase::services::import_service::ImportService;
use crate::usecase::transform::SheetReport;

const CELL_STYLE: &str = "border: 1px solid #ddd; padding: 4px 10px; text-align: right;";
const HEADER_CELL_STYLE: &str =
    "border: 1px solid #ddd; padding: 4px 10px; background: #f5f5f5; text-align: left;";

#[component]
fn SheetReportTable(sheets: Vec<SheetReport>) -> Element {
    rsx! {
        table {
            style: "border-collapse: collapse; margin-top: 8px;",
            thead {
                tr {
                    th { style: HEADER_CELL_STYLE, "Sheet" }
                    th { style: HEADER_CELL_STYLE, "Header rows" }
                    th { style: HEADER_CELL_STYLE, "Data rows" }
                    th { style: HEADER_CELL_STYLE, "Kept" }
                    th { style: HEADER_CELL_STYLE, "Removed" }
                }
            }
            tbody {
                for sheet in sheets.iter() {
                    tr { key: "{sheet.name}",
                        td { style: "border: 1px solid #ddd; padding: 4px 10px;", "{sheet.name}" }
                        td { style: CELL_STYLE, "{sheet.header_rows}" }
                        td { style: CELL_STYLE, "{sheet.data_rows}" }
                        td { style: CELL_STYLE, "{sheet.kept_rows}" }
                        td { style: CELL_STYLE, "{sheet.dropped_rows}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn App() -> Element {
    let AppState {
        mut workbook,
        mut last_report,
        mut status,
    } = AppState::new();
    let output_dir = use_hook(|| default_export_dir().map_err(|err| format!("{err:#}")));

    let output_dir = match output_dir {
        Ok(path) => path,
        Err(err) => {
            return rsx! {
                div {
                    p { "Cannot resolve the download folder: {err}" }
                }
            };
        }
    };

    let export_config = ExportConfig::new(output_dir);
    let import_service = Arc::new(ImportService::new(Arc::new(CalamineSource)));
    let export_service = Arc::new(ExportService::new(
        Arc::new(XlsxDownloadSink {
            output_dir: export_config.output_dir.clone(),
        }),
        TransformConfig::default(),
        export_config.file_prefix.clone(),
    ));

    let handle_pick = move |_: MouseEvent| {
        let Some(file_path) = FileDialog::new()
            .add_filter("Spreadsheet", ACCEPTED_EXTENSIONS)
            .pick_file()
        else {
            return;
        };

        match run_blocking("load", || import_service.load(&file_path)) {
            Ok(loaded) => {
                *status.write() = format!(
                    "Loaded {} ({} sheets)",
                    loaded.file_name,
                    loaded.workbook.sheets.len()
                );
                workbook.set(Some(loaded));
                last_report.set(None);
            }
            Err(err) => {
                tracing::warn!(error = %err, "load failed");
                *status.write() = format!("Could not read the file: {err}");
            }
        }
    };

    let handle_export = move |_: MouseEvent| {
        let current = workbook.read();
        let Some(loaded) = current.as_ref() else {
            return;
        };

        let result = run_blocking("export", || {
            export_service.export(loaded, Local::now().naive_local())
        });
        drop(current);

        match result {
            Ok(report) => {
                *status.write() = format!(
                    "Saved {} to {} ({} duplicate rows removed)",
                    report.file_name,
                    report.path.parent().map(|dir| dir.display().to_string()).unwrap_or_default(),
                    report.dropped_rows()
                );
                last_report.set(Some(report));
            }
            Err(err) => {
                *status.write() = format!("Export failed: {err}");
                MessageDialog::new()
                    .set_level(MessageLevel::Error)
                    .set_title("Export failed")
                    .set_description(err.to_string())
                    .set_buttons(MessageButtons::Ok)
                    .show();
            }
        }
    };

    let loaded_label = workbook.read().as_ref().map(|loaded| {
        (
            format!(
                "{} · {} sheet(s)",
                loaded.file_name,
                loaded.workbook.sheets.len()
            ),
            loaded.source_path.display().to_string(),
        )
    });
    let can_export = loaded_label.is_some();
    let output_dir_label = export_config.output_dir.display().to_string();
    let status_text = status();

    rsx! {
        div {
            style: "font-family: sans-serif; padding: 20px; background: #fff; min-height: 100vh;",

            h2 { "Excel Date Converter + Deduplicate" }

            div {
                style: "display: flex; gap: 8px; align-items: center; margin-bottom: 12px;",
                button { onclick: handle_pick, "Choose file…" }
                button { disabled: !can_export, onclick: handle_export, "Process & Export" }
            }

            if let Some((label, source)) = loaded_label {
                p { title: "{source}", "File: {label}" }
            }
            p { style: "color: #666;", "Output folder: {output_dir_label}" }
            p { "{status_text}" }

            if let Some(report) = last_report() {
                SheetReportTable { sheets: report.sheets }
            }
        }
    }
}
