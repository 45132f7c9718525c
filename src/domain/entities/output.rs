use std::collections::BTreeMap;
use std::fmt;

use crate::domain::entities::cell::CellDate;

/// Number format attached to every written cell so nothing is inherited from
/// the source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayFormat {
    DayMonthYear,
    General,
    Text,
}

impl DisplayFormat {
    pub fn pattern(self) -> &'static str {
        match self {
            DisplayFormat::DayMonthYear => "dd/mm/yyyy",
            DisplayFormat::General => "General",
            DisplayFormat::Text => "@",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OutputValue {
    Date(CellDate),
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutputCell {
    pub value: OutputValue,
    pub format: DisplayFormat,
}

impl OutputCell {
    pub fn new(value: OutputValue) -> Self {
        let format = match value {
            OutputValue::Date(_) => DisplayFormat::DayMonthYear,
            OutputValue::Number(_) => DisplayFormat::General,
            OutputValue::Text(_) => DisplayFormat::Text,
        };
        Self { value, format }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellAddress {
    pub row: u32,
    pub col: u16,
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_letters(self.col), self.row + 1)
    }
}

fn column_letters(col: u16) -> String {
    let mut n = u32::from(col) + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = ((n - 1) % 26) as u8;
        letters.push(char::from(b'A' + rem));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub first: CellAddress,
    pub last: CellAddress,
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.first, self.last)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OutputSheet {
    pub name: String,
    pub cells: BTreeMap<CellAddress, OutputCell>,
    /// `None` when no cell was emitted.
    pub range: Option<CellRange>,
}

#[allow(dead_code)]
impl OutputSheet {
    pub fn cell(&self, row: u32, col: u16) -> Option<&OutputCell> {
        self.cells.get(&CellAddress { row, col })
    }

    pub fn row_cells(&self, row: u32) -> impl Iterator<Item = (u16, &OutputCell)> {
        self.cells
            .range(CellAddress { row, col: 0 }..=CellAddress { row, col: u16::MAX })
            .map(|(addr, cell)| (addr.col, cell))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OutputWorkbook {
    pub sheets: Vec<OutputSheet>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addresses_render_in_a1_notation() {
        assert_eq!(CellAddress { row: 0, col: 0 }.to_string(), "A1");
        assert_eq!(CellAddress { row: 9, col: 25 }.to_string(), "Z10");
        assert_eq!(CellAddress { row: 1, col: 26 }.to_string(), "AA2");
        let range = CellRange {
            first: CellAddress { row: 0, col: 0 },
            last: CellAddress { row: 8, col: 702 },
        };
        assert_eq!(range.to_string(), "A1:AAA9");
    }

    #[test]
    fn output_cell_picks_format_from_value() {
        assert_eq!(
            OutputCell::new(OutputValue::Number(1.0)).format.pattern(),
            "General"
        );
        assert_eq!(
            OutputCell::new(OutputValue::Text("x".into())).format.pattern(),
            "@"
        );
    }
}
