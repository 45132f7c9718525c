//! Date normalization for cell values.
//!
//! Each input kind has an ordered list of parse strategies. The first one that
//! produces a date wins; when none does, the cell comes back untouched.

pub mod serial;
pub mod text;

use crate::domain::entities::cell::{CellDate, CellValue};

type NumericStrategy = (&'static str, fn(f64) -> Option<CellDate>);
type TextStrategy = (&'static str, fn(&str) -> Option<CellDate>);

const NUMERIC_STRATEGIES: &[NumericStrategy] = &[
    ("spreadsheet-serial", serial::from_serial),
    ("epoch-offset", serial::from_epoch_offset),
];

const TEXT_STRATEGIES: &[TextStrategy] = &[
    ("day-month-year", text::parse_day_first),
    ("year-month-day", text::parse_year_first),
    ("free-form", text::parse_free_form),
];

fn first_success<T, F>(strategies: &[(&'static str, F)], input: T) -> Option<CellDate>
where
    T: Copy,
    F: Fn(T) -> Option<CellDate>,
{
    strategies.iter().find_map(|(name, parse)| {
        let parsed = parse(input);
        if parsed.is_some() {
            tracing::trace!(strategy = *name, "date strategy matched");
        }
        parsed
    })
}

/// Turns a date-like cell into [`CellValue::Date`].
///
/// Dates pass through as they are. Zero, empty cells and anything no strategy
/// understands are returned unchanged.
pub fn normalize_date(value: CellValue) -> CellValue {
    let parsed = match &value {
        CellValue::Empty | CellValue::Date(_) => None,
        CellValue::Number(n) if *n == 0.0 => None,
        CellValue::Number(n) => first_success(NUMERIC_STRATEGIES, *n),
        CellValue::Text(s) if s.is_empty() => None,
        CellValue::Text(s) => first_success(TEXT_STRATEGIES, s.as_str()),
    };
    parsed.map(CellValue::Date).unwrap_or(value)
}
