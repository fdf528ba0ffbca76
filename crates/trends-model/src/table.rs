//! Raw tabular input handed over by a dataset provider.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single typed cell as produced by the dataset provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Number(f64),
    Text(String),
    Missing,
}

impl CellValue {
    /// Numeric view of the cell. Numeric text is accepted; NaN counts as missing.
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            CellValue::Number(value) => *value,
            CellValue::Text(text) => text.trim().parse::<f64>().ok()?,
            CellValue::Missing => return None,
        };
        if value.is_nan() { None } else { Some(value) }
    }

    /// Text view of the cell. Blank text counts as missing.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) if !text.trim().is_empty() => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Missing => true,
            CellValue::Number(value) => value.is_nan(),
            CellValue::Text(text) => text.trim().is_empty(),
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Missing, Into::into)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetRow {
    pub cells: BTreeMap<String, CellValue>,
}

impl DatasetRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style cell insertion.
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.cells.insert(column.into(), value.into());
        self
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }
}

/// Column schema plus rows, in source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetTable {
    pub columns: Vec<String>,
    pub rows: Vec<DatasetRow>,
}

impl DatasetTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: DatasetRow) {
        self.rows.push(row);
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_text_is_a_number() {
        assert_eq!(CellValue::from(" 7.5 ").as_number(), Some(7.5));
        assert_eq!(CellValue::from("abc").as_number(), None);
        assert_eq!(CellValue::Number(f64::NAN).as_number(), None);
    }

    #[test]
    fn blank_text_is_missing() {
        assert!(CellValue::from("  ").is_missing());
        assert!(CellValue::from(None::<f64>).is_missing());
        assert_eq!(CellValue::from("FIN").as_text(), Some("FIN"));
        assert_eq!(CellValue::Number(1.0).as_text(), None);
    }
}
