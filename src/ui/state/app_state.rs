use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::workbook::LoadedWorkbook;
use crate::usecase::services::export_service::ExportReport;

pub struct AppState {
    /// Latest picked workbook; replaced on every successful load.
    pub workbook: Signal<Option<LoadedWorkbook>>,
    pub last_report: Signal<Option<ExportReport>>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            workbook: use_signal(|| None::<LoadedWorkbook>),
            last_report: use_signal(|| None::<ExportReport>),
            status: use_signal(|| "Choose a spreadsheet to begin".to_string()),
        }
    }
}
