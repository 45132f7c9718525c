use std::collections::HashSet;

use crate::config::TransformConfig;
use crate::domain::dates::normalize_date;
use crate::domain::entities::cell::{cell_at, CellValue, Row};

pub fn composite_key(row: &[CellValue], config: &TransformConfig) -> String {
    config
        .key_columns
        .iter()
        .map(|&col_idx| cell_at(row, col_idx).key_component(&config.empty_key_placeholder))
        .collect::<Vec<_>>()
        .join(&config.key_separator)
}

fn normalize_date_columns(row: &mut Row, config: &TransformConfig) {
    for &col_idx in &config.date_columns {
        if let Some(cell) = row.get_mut(col_idx) {
            if cell.is_truthy() {
                *cell = normalize_date(std::mem::take(cell));
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DedupOutcome {
    pub kept: Vec<Row>,
    pub dropped: usize,
}

/// Keeps the first row for every composite key, in input order, and
/// normalizes the date columns of the rows it keeps.
pub fn dedup_rows(rows: &[Row], config: &TransformConfig) -> DedupOutcome {
    let mut seen = HashSet::with_capacity(rows.len());
    let mut outcome = DedupOutcome::default();

    for row in rows {
        if !seen.insert(composite_key(row, config)) {
            outcome.dropped += 1;
            continue;
        }
        let mut row = row.clone();
        normalize_date_columns(&mut row, config);
        outcome.kept.push(row);
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_row(values: &[&str]) -> Row {
        values
            .iter()
            .map(|v| {
                if v.is_empty() {
                    CellValue::Empty
                } else {
                    CellValue::text(*v)
                }
            })
            .collect()
    }

    #[test]
    fn composite_key_joins_key_columns_with_separator() {
        let config = TransformConfig::default();
        let row = text_row(&["a", "", "", "", "", "", "g", "h", "i"]);
        assert_eq!(composite_key(&row, &config), "g__h__i");
    }

    #[test]
    fn composite_key_treats_missing_columns_as_placeholder() {
        let config = TransformConfig::default();
        assert_eq!(composite_key(&text_row(&["a"]), &config), "____");

        let config = TransformConfig {
            empty_key_placeholder: "null".to_string(),
            ..TransformConfig::default()
        };
        let row = text_row(&["", "", "", "", "", "", "g"]);
        assert_eq!(composite_key(&row, &config), "g__null__null");
    }

    #[test]
    fn numbers_and_text_with_same_digits_collide() {
        let config = TransformConfig::default();
        let mut numeric = text_row(&["", "", "", "", "", "", "x", "y"]);
        numeric.push(CellValue::Number(5.0));
        let textual = text_row(&["", "", "", "", "", "", "x", "y", "5"]);
        assert_eq!(composite_key(&numeric, &config), composite_key(&textual, &config));
    }

    #[test]
    fn first_occurrence_wins_and_order_is_kept() {
        let config = TransformConfig::default();
        let rows = vec![
            text_row(&["1", "", "", "", "", "", "A", "B", "C"]),
            text_row(&["2", "", "", "", "", "", "X", "Y", "Z"]),
            text_row(&["3", "", "", "", "", "", "A", "B", "C"]),
            text_row(&["4", "", "", "", "", "", "A", "B", "D"]),
            text_row(&["5", "", "", "", "", "", "X", "Y", "Z"]),
        ];

        let outcome = dedup_rows(&rows, &config);

        let ids: Vec<_> = outcome.kept.iter().map(|r| r[0].clone()).collect();
        assert_eq!(
            ids,
            vec![CellValue::text("1"), CellValue::text("2"), CellValue::text("4")]
        );
        assert_eq!(outcome.dropped, 2);
    }

    #[test]
    fn rows_without_key_values_collapse_into_one() {
        let config = TransformConfig::default();
        let rows = vec![text_row(&["a"]), text_row(&["b", "x"]), Vec::new()];
        let outcome = dedup_rows(&rows, &config);
        assert_eq!(outcome.kept.len(), 1);
        assert_eq!(outcome.dropped, 2);
    }

    #[test]
    fn kept_rows_get_date_columns_normalized() {
        let config = TransformConfig::default();
        let mut row = text_row(&["id", "25/12/2023", "", "", "", "", "g", "h"]);
        row.push(CellValue::Number(45285.0));
        let outcome = dedup_rows(&[row], &config);

        let kept = &outcome.kept[0];
        assert!(matches!(&kept[1], CellValue::Date(d) if d.ymd() == (2023, 12, 25)));
        assert!(matches!(&kept[8], CellValue::Date(d) if d.ymd() == (2023, 12, 25)));
        assert_eq!(kept[6], CellValue::text("g"));
    }

    #[test]
    fn key_uses_raw_value_before_normalization() {
        let config = TransformConfig::default();
        let first = text_row(&["", "", "", "", "", "", "g", "h", "25/12/2023"]);
        let second = text_row(&["", "", "", "", "", "", "g", "h", "2023-12-25"]);
        let outcome = dedup_rows(&[first, second], &config);
        assert_eq!(outcome.kept.len(), 2);
    }

    #[test]
    fn falsy_date_cells_are_not_touched() {
        let config = TransformConfig::default();
        let row = vec![
            CellValue::Empty,
            CellValue::Number(0.0),
            CellValue::Empty,
            CellValue::Empty,
            CellValue::Empty,
            CellValue::Empty,
            CellValue::text("k"),
            CellValue::Empty,
            CellValue::text("not a date"),
        ];
        let outcome = dedup_rows(&[row.clone()], &config);
        assert_eq!(outcome.kept, vec![row]);
    }
}
