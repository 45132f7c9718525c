use std::path::PathBuf;

use crate::domain::entities::cell::Row;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Row>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }
}

/// Sheets in workbook order. Names are unique.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

#[allow(dead_code)]
impl Workbook {
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }
}

/// Workbook parsed from a picked file, held until the next export.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedWorkbook {
    pub file_name: String,
    pub source_path: PathBuf,
    pub workbook: Workbook,
}
