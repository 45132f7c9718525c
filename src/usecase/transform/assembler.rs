use std::collections::BTreeMap;

use crate::domain::entities::cell::{CellValue, Row};
use crate::domain::entities::output::{
    CellAddress, CellRange, OutputCell, OutputSheet, OutputValue,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    Header,
    Data,
}

fn output_value(cell: &CellValue, region: Region) -> Option<OutputValue> {
    match cell {
        CellValue::Empty => None,
        CellValue::Number(v) => Some(OutputValue::Number(*v)),
        CellValue::Date(v) => Some(OutputValue::Date(*v)),
        CellValue::Text(v) => {
            let text = match region {
                Region::Header => v.as_str(),
                Region::Data => v.trim(),
            };
            (!text.is_empty()).then(|| OutputValue::Text(text.to_string()))
        }
    }
}

/// Builds the written form of a sheet: header rows verbatim, then the data
/// rows with their text trimmed. Empty cells are left out and the range spans
/// from A1 to the furthest populated row and column.
pub fn assemble_sheet(name: &str, header: &[Row], data: &[Row]) -> OutputSheet {
    let mut cells = BTreeMap::new();
    let mut last: Option<CellAddress> = None;

    let regions = header
        .iter()
        .map(|row| (row, Region::Header))
        .chain(data.iter().map(|row| (row, Region::Data)));

    for (row_idx, (row, region)) in regions.enumerate() {
        let Ok(row_idx) = u32::try_from(row_idx) else {
            tracing::warn!(sheet = name, "row limit reached, remaining rows skipped");
            break;
        };
        for (col_idx, cell) in row.iter().enumerate() {
            let Some(value) = output_value(cell, region) else {
                continue;
            };
            let Ok(col) = u16::try_from(col_idx) else {
                tracing::warn!(sheet = name, row = row_idx, "column limit reached");
                break;
            };
            let addr = CellAddress { row: row_idx, col };
            last = Some(match last {
                Some(prev) => CellAddress {
                    row: prev.row.max(addr.row),
                    col: prev.col.max(addr.col),
                },
                None => addr,
            });
            cells.insert(addr, OutputCell::new(value));
        }
    }

    OutputSheet {
        name: name.to_string(),
        cells,
        range: last.map(|last| CellRange {
            first: CellAddress { row: 0, col: 0 },
            last,
        }),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::entities::cell::CellDate;
    use crate::domain::entities::output::DisplayFormat;

    #[test]
    fn header_rows_come_first_then_data() {
        let header = vec![vec![CellValue::text("Title")], vec![CellValue::text("Sub")]];
        let data = vec![vec![CellValue::text("r1")], vec![CellValue::text("r2")]];

        let sheet = assemble_sheet("S", &header, &data);

        let column_a: Vec<_> = (0..4)
            .map(|r| sheet.cell(r, 0).map(|c| c.value.clone()))
            .collect();
        assert_eq!(
            column_a,
            vec![
                Some(OutputValue::Text("Title".into())),
                Some(OutputValue::Text("Sub".into())),
                Some(OutputValue::Text("r1".into())),
                Some(OutputValue::Text("r2".into())),
            ]
        );
        assert_eq!(sheet.name, "S");
    }

    #[test]
    fn data_text_is_trimmed_but_header_text_is_not() {
        let header = vec![vec![CellValue::text("  Title  ")]];
        let data = vec![vec![CellValue::text("  value\t"), CellValue::text("   ")]];

        let sheet = assemble_sheet("S", &header, &data);

        assert_eq!(
            sheet.cell(0, 0).map(|c| &c.value),
            Some(&OutputValue::Text("  Title  ".into()))
        );
        assert_eq!(
            sheet.cell(1, 0).map(|c| &c.value),
            Some(&OutputValue::Text("value".into()))
        );
        assert_eq!(sheet.cell(1, 1), None, "blank text should be dropped");
    }

    #[test]
    fn cells_are_tagged_with_display_formats() {
        let date = CellDate::from_date(NaiveDate::from_ymd_opt(2023, 12, 25).expect("valid"));
        let data = vec![vec![
            CellValue::Date(date),
            CellValue::Number(12.5),
            CellValue::text("x"),
        ]];

        let sheet = assemble_sheet("S", &[], &data);

        let formats: Vec<_> = sheet.row_cells(0).map(|(_, c)| c.format).collect();
        assert_eq!(
            formats,
            vec![
                DisplayFormat::DayMonthYear,
                DisplayFormat::General,
                DisplayFormat::Text
            ]
        );
        assert_eq!(
            sheet.cell(0, 0).map(|c| &c.value),
            Some(&OutputValue::Date(date))
        );
    }

    #[test]
    fn range_tracks_furthest_populated_cell() {
        let data = vec![
            vec![CellValue::text("a"), CellValue::Empty, CellValue::Empty],
            vec![
                CellValue::Empty,
                CellValue::Empty,
                CellValue::Empty,
                CellValue::Number(1.0),
                CellValue::text(""),
            ],
            vec![CellValue::text("b")],
            vec![],
        ];

        let sheet = assemble_sheet("S", &[], &data);

        assert_eq!(sheet.row_cells(0).count(), 1, "trailing empties omitted");
        assert_eq!(sheet.row_cells(1).map(|(c, _)| c).collect::<Vec<_>>(), vec![3]);
        let range = sheet.range.expect("range should be recorded");
        assert_eq!(range.to_string(), "A1:D3");
    }

    #[test]
    fn empty_sheet_has_no_range() {
        let sheet = assemble_sheet("Empty", &[], &[vec![CellValue::Empty]]);
        assert!(sheet.cells.is_empty());
        assert_eq!(sheet.range, None);
    }
}
