//! Canonical, type-directed cell stringification.
//!
//! The rules are total: every payload and every row index produces *some*
//! string, so rendering can never fail a table read.
//!
//! - floats render with fixed 3 decimals (`2.0 -> "2.000"`)
//! - ints render as plain decimals, bools as `"true"` / `"false"`
//! - list payloads comma-join the scalar rule; an empty list renders as `""`
//! - a row index past the realized column length renders as `"NaN"` for
//!   numeric payloads, `"false"` for bools, `"N/A"` otherwise
//! - payloads without a display rule (raw frame indices) render as `"?"`

use lattice_model::ColumnData;

fn float_text(value: f64) -> String {
    format!("{value:.3}")
}

fn bool_text(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

fn join<T>(values: &[T], mut scalar: impl FnMut(&T) -> String) -> String {
    let mut out = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&scalar(value));
    }
    out
}

/// Render the cell at `row` of `column` as a display string.
pub fn cell_text(column: &ColumnData, row: usize) -> String {
    match column {
        ColumnData::Float(values) => values
            .get(row)
            .map(|v| float_text(*v))
            .unwrap_or_else(|| "NaN".to_owned()),
        ColumnData::Int(values) => values
            .get(row)
            .map(|v| v.to_string())
            .unwrap_or_else(|| "NaN".to_owned()),
        ColumnData::Bool(values) => bool_text(values.get(row).copied().unwrap_or(false)).to_owned(),
        ColumnData::ListFloat(values) => values
            .get(row)
            .map(|v| join(v, |x| float_text(*x)))
            .unwrap_or_else(|| "N/A".to_owned()),
        ColumnData::ListInt(values) => values
            .get(row)
            .map(|v| join(v, |x| x.to_string()))
            .unwrap_or_else(|| "N/A".to_owned()),
        ColumnData::ListBool(values) => values
            .get(row)
            .map(|v| join(v, |x| bool_text(*x).to_owned()))
            .unwrap_or_else(|| "N/A".to_owned()),
        ColumnData::TimeIndex(_) => "?".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lattice_model::TimeFrameIndex;
    use pretty_assertions::assert_eq;

    #[test]
    fn floats_render_with_three_decimals() {
        assert_eq!(cell_text(&ColumnData::Float(vec![2.0]), 0), "2.000");
        assert_eq!(cell_text(&ColumnData::Float(vec![-0.5]), 0), "-0.500");
    }

    #[test]
    fn scalars_render_canonically() {
        assert_eq!(cell_text(&ColumnData::Int(vec![42]), 0), "42");
        assert_eq!(cell_text(&ColumnData::Bool(vec![true]), 0), "true");
        assert_eq!(cell_text(&ColumnData::Bool(vec![false]), 0), "false");
    }

    #[test]
    fn lists_comma_join_the_scalar_rule() {
        assert_eq!(
            cell_text(&ColumnData::ListFloat(vec![vec![2.0, 3.0, 4.0]]), 0),
            "2.000,3.000,4.000"
        );
        assert_eq!(
            cell_text(&ColumnData::ListInt(vec![vec![1, 2]]), 0),
            "1,2"
        );
        assert_eq!(
            cell_text(&ColumnData::ListBool(vec![vec![true, false]]), 0),
            "true,false"
        );
    }

    #[test]
    fn empty_list_renders_as_empty_string() {
        assert_eq!(cell_text(&ColumnData::ListFloat(vec![Vec::new()]), 0), "");
    }

    #[test]
    fn row_past_column_length_degrades_per_type() {
        assert_eq!(cell_text(&ColumnData::Float(vec![1.0]), 1), "NaN");
        assert_eq!(cell_text(&ColumnData::Int(vec![1]), 1), "NaN");
        assert_eq!(cell_text(&ColumnData::Bool(vec![true]), 1), "false");
        assert_eq!(cell_text(&ColumnData::ListFloat(vec![vec![1.0]]), 1), "N/A");
    }

    #[test]
    fn payloads_without_a_display_rule_render_as_question_mark() {
        let column = ColumnData::TimeIndex(vec![TimeFrameIndex(7)]);
        assert_eq!(cell_text(&column, 0), "?");
    }
}
