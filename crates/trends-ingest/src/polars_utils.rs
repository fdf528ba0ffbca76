//! Polars AnyValue conversion into dataset cells.

use polars::prelude::AnyValue;
use trends_model::CellValue;

/// Converts a Polars `AnyValue` into a typed cell.
///
/// Nulls, NaN and blank strings become [`CellValue::Missing`]; every numeric
/// dtype becomes [`CellValue::Number`].
pub fn any_to_cell(value: AnyValue<'_>) -> CellValue {
    match value {
        AnyValue::Null => CellValue::Missing,
        AnyValue::Int8(v) => CellValue::Number(f64::from(v)),
        AnyValue::Int16(v) => CellValue::Number(f64::from(v)),
        AnyValue::Int32(v) => CellValue::Number(f64::from(v)),
        AnyValue::Int64(v) => CellValue::Number(v as f64),
        AnyValue::UInt8(v) => CellValue::Number(f64::from(v)),
        AnyValue::UInt16(v) => CellValue::Number(f64::from(v)),
        AnyValue::UInt32(v) => CellValue::Number(f64::from(v)),
        AnyValue::UInt64(v) => CellValue::Number(v as f64),
        AnyValue::Float32(v) => number_cell(f64::from(v)),
        AnyValue::Float64(v) => number_cell(v),
        AnyValue::String(s) => text_cell(s),
        AnyValue::StringOwned(s) => text_cell(s.as_str()),
        AnyValue::Boolean(b) => CellValue::Text(b.to_string()),
        other => text_cell(&other.to_string()),
    }
}

fn number_cell(value: f64) -> CellValue {
    if value.is_nan() {
        CellValue::Missing
    } else {
        CellValue::Number(value)
    }
}

fn text_cell(value: &str) -> CellValue {
    let trimmed = value.trim().trim_matches('\u{feff}');
    if trimmed.is_empty() {
        CellValue::Missing
    } else {
        CellValue::Text(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_numeric_dtypes() {
        assert_eq!(any_to_cell(AnyValue::Int64(54)), CellValue::Number(54.0));
        assert_eq!(any_to_cell(AnyValue::Float64(7.8)), CellValue::Number(7.8));
        assert_eq!(any_to_cell(AnyValue::Float64(f64::NAN)), CellValue::Missing);
    }

    #[test]
    fn converts_text_and_nulls() {
        assert_eq!(
            any_to_cell(AnyValue::String(" Finland ")),
            CellValue::Text("Finland".to_string())
        );
        assert_eq!(any_to_cell(AnyValue::String("   ")), CellValue::Missing);
        assert_eq!(any_to_cell(AnyValue::Null), CellValue::Missing);
    }
}
