use std::path::PathBuf;

use rust_xlsxwriter::{Format, Workbook, XlsxError};

use crate::domain::entities::output::{DisplayFormat, OutputSheet, OutputValue, OutputWorkbook};
use crate::usecase::ports::workbook_io::{CodecError, WorkbookSink};

struct Formats {
    date: Format,
    general: Format,
    text: Format,
}

impl Formats {
    fn new() -> Self {
        Self {
            date: Format::new().set_num_format(DisplayFormat::DayMonthYear.pattern()),
            general: Format::new().set_num_format(DisplayFormat::General.pattern()),
            text: Format::new().set_num_format(DisplayFormat::Text.pattern()),
        }
    }

    fn get(&self, format: DisplayFormat) -> &Format {
        match format {
            DisplayFormat::DayMonthYear => &self.date,
            DisplayFormat::General => &self.general,
            DisplayFormat::Text => &self.text,
        }
    }
}

fn write_sheet(
    workbook: &mut Workbook,
    sheet: &OutputSheet,
    formats: &Formats,
) -> Result<(), XlsxError> {
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&sheet.name)?;

    for (addr, cell) in &sheet.cells {
        let format = formats.get(cell.format);
        match &cell.value {
            OutputValue::Date(date) => {
                worksheet.write_number_with_format(addr.row, addr.col, date.to_serial(), format)?;
            }
            OutputValue::Number(value) => {
                worksheet.write_number_with_format(addr.row, addr.col, *value, format)?;
            }
            OutputValue::Text(value) => {
                worksheet.write_string_with_format(addr.row, addr.col, value, format)?;
            }
        }
    }
    Ok(())
}

/// Serializes the assembled workbook to xlsx bytes.
pub fn serialize_workbook(output: &OutputWorkbook) -> Result<Vec<u8>, CodecError> {
    let mut workbook = Workbook::new();
    let formats = Formats::new();

    for sheet in &output.sheets {
        write_sheet(&mut workbook, sheet, &formats)
            .map_err(|err| CodecError::Serialize(format!("sheet {}: {err}", sheet.name)))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|err| CodecError::Serialize(err.to_string()))
}

/// Drops exported files into a directory, the desktop stand-in for a
/// browser download.
pub struct XlsxDownloadSink {
    pub output_dir: PathBuf,
}

impl WorkbookSink for XlsxDownloadSink {
    fn write(&self, workbook: &OutputWorkbook, file_name: &str) -> Result<PathBuf, CodecError> {
        let bytes = serialize_workbook(workbook)?;
        let path = self.output_dir.join(file_name);

        std::fs::create_dir_all(&self.output_dir).map_err(|source| CodecError::Write {
            path: self.output_dir.display().to_string(),
            source,
        })?;
        std::fs::write(&path, bytes).map_err(|source| CodecError::Write {
            path: path.display().to_string(),
            source,
        })?;
        Ok(path)
    }
}
