use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use crate::domain::dates::serial;

/// Day part of a date cell.
///
/// Spreadsheet serial 60 names 1900-02-29, which the proleptic calendar does
/// not have, so it gets its own variant instead of being shifted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarDay {
    Real(NaiveDate),
    PhantomLeapDay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellDate {
    pub day: CalendarDay,
    pub time: Option<NaiveTime>,
}

impl CellDate {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            day: CalendarDay::Real(date),
            time: None,
        }
    }

    pub fn with_time(mut self, time: NaiveTime) -> Self {
        self.time = (time != NaiveTime::MIN).then_some(time);
        self
    }

    pub fn ymd(&self) -> (i32, u32, u32) {
        match self.day {
            CalendarDay::Real(date) => (date.year(), date.month(), date.day()),
            CalendarDay::PhantomLeapDay => (1900, 2, 29),
        }
    }

    pub fn to_serial(&self) -> f64 {
        serial::to_serial(self)
    }
}

impl From<NaiveDate> for CellDate {
    fn from(value: NaiveDate) -> Self {
        CellDate::from_date(value)
    }
}

impl fmt::Display for CellDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day) = self.ymd();
        write!(f, "{day:02}/{month:02}/{year:04}")?;
        if let Some(time) = self.time {
            write!(
                f,
                " {:02}:{:02}:{:02}",
                time.hour(),
                time.minute(),
                time.second()
            )?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Date(CellDate),
}

static EMPTY_CELL: CellValue = CellValue::Empty;

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(v) => v.is_empty(),
            CellValue::Number(_) | CellValue::Date(_) => false,
        }
    }

    /// Whether the cell carries a value worth normalizing: non-empty text, a
    /// non-zero number or a date.
    pub fn is_truthy(&self) -> bool {
        match self {
            CellValue::Empty => false,
            CellValue::Text(v) => !v.is_empty(),
            CellValue::Number(v) => *v != 0.0 && !v.is_nan(),
            CellValue::Date(_) => true,
        }
    }

    /// String form used when building a duplicate-detection key.
    pub fn key_component(&self, empty_placeholder: &str) -> String {
        match self {
            CellValue::Empty => empty_placeholder.to_string(),
            CellValue::Text(v) if v.is_empty() => empty_placeholder.to_string(),
            CellValue::Text(v) => v.clone(),
            CellValue::Number(v) => v.to_string(),
            CellValue::Date(v) => v.to_string(),
        }
    }
}

pub type Row = Vec<CellValue>;

/// Cell at `col_idx`, or an empty cell when the row is shorter.
pub fn cell_at(row: &[CellValue], col_idx: usize) -> &CellValue {
    row.get(col_idx).unwrap_or(&EMPTY_CELL)
}
