use std::io::Cursor;

use calamine::{
    open_workbook_auto_from_rs, Data, ExcelDateTime, ExcelDateTimeType, Range, Reader,
};

use crate::domain::dates::normalize_date;
use crate::domain::dates::serial::from_serial;
use crate::domain::dates::text::parse_free_form;
use crate::domain::entities::cell::{CellValue, Row};
use crate::domain::entities::workbook::{Sheet, Workbook};
use crate::usecase::ports::workbook_io::{CodecError, WorkbookSource};

/// Days between the 1900 and 1904 date systems.
const DATE_1904_OFFSET: f64 = 1462.0;

/// Serial in the 1900 date system. calamine keeps the workbook's date system
/// private, so a 1904 cell is told apart by comparing against a 1900 rebuild
/// of the same value.
fn serial_1900(value: &ExcelDateTime) -> f64 {
    let raw = value.as_f64();
    if *value == ExcelDateTime::new(raw, ExcelDateTimeType::DateTime, false) {
        raw
    } else {
        raw + DATE_1904_OFFSET
    }
}

pub fn cell_from_data(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(v) => CellValue::Text(v.clone()),
        Data::Float(v) => CellValue::Number(*v),
        Data::Int(v) => CellValue::Number(*v as f64),
        Data::Bool(v) => CellValue::text(if *v { "TRUE" } else { "FALSE" }),
        Data::DateTime(v) if v.is_duration() => CellValue::Number(v.as_f64()),
        Data::DateTime(v) => from_serial(serial_1900(v))
            .map(CellValue::Date)
            .unwrap_or(CellValue::Number(v.as_f64())),
        Data::DateTimeIso(v) => parse_free_form(v)
            .map(CellValue::Date)
            .unwrap_or_else(|| normalize_date(CellValue::Text(v.clone()))),
        Data::DurationIso(v) => CellValue::Text(v.clone()),
        Data::Error(v) => CellValue::Text(v.to_string()),
    }
}

/// Rows positioned from A1: rows and columns before the range start are
/// filled with empty cells, trailing empty cells are dropped.
pub fn rows_from_range(range: &Range<Data>) -> Vec<Row> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };

    let mut rows: Vec<Row> = vec![Vec::new(); start_row as usize];
    for source in range.rows() {
        let mut row: Row = vec![CellValue::Empty; start_col as usize];
        row.extend(source.iter().map(cell_from_data));
        while row.last().is_some_and(CellValue::is_empty) {
            row.pop();
        }
        rows.push(row);
    }
    rows
}

/// Reads every sheet calamine can open (xlsx, xlsm, xlsb, xls, ods).
pub struct CalamineSource;

impl WorkbookSource for CalamineSource {
    fn parse(&self, bytes: Vec<u8>) -> Result<Workbook, CodecError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
            .map_err(|err| CodecError::Parse(err.to_string()))?;

        let mut sheets = Vec::new();
        for name in workbook.sheet_names() {
            let range = workbook
                .worksheet_range(&name)
                .map_err(|err| CodecError::Parse(format!("sheet {name}: {err}")))?;
            let rows = rows_from_range(&range);
            tracing::debug!(sheet = %name, rows = rows.len(), "sheet read");
            sheets.push(Sheet::new(name, rows));
        }

        Ok(Workbook { sheets })
    }
}
