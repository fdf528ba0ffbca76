//! Immutable in-memory record store.
//!
//! The store is built once from a [`DatasetTable`] and never mutated
//! afterwards, so it can be shared read-only (for example behind an `Arc`)
//! across any number of dashboard sessions.

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, warn};

use crate::error::{Result, SchemaError};
use crate::record::{
    AI_SUMMARY, COUNTRY, COUNTRY_CODE, CountryRecord, EDUCATION_EXPENDITURE, GDP_PER_CAPITA,
    HAPPINESS_SCORE, LIFE_EXPECTANCY, MANDATORY_COLUMNS, PREDICTED_HAPPINESS, REGION,
};
use crate::table::{CellValue, DatasetRow, DatasetTable};

#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<CountryRecord>,
    columns: BTreeSet<String>,
    index: HashMap<String, usize>,
}

impl RecordStore {
    /// Build a store from provider rows, enforcing the schema invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] when the table is empty, a mandatory column
    /// is absent, a mandatory value is null or mistyped, or a country
    /// name repeats.
    pub fn load(table: &DatasetTable) -> Result<Self> {
        if table.rows.is_empty() {
            return Err(SchemaError::EmptyDataset);
        }
        for column in MANDATORY_COLUMNS {
            if !table.has_column(column) {
                return Err(SchemaError::MissingColumn {
                    column: column.to_string(),
                });
            }
        }
        let columns: BTreeSet<String> = table.columns.iter().cloned().collect();
        let has_predicted = columns.contains(PREDICTED_HAPPINESS);
        let has_summary = columns.contains(AI_SUMMARY);

        let mut records = Vec::with_capacity(table.rows.len());
        let mut index = HashMap::with_capacity(table.rows.len());
        for (idx, row) in table.rows.iter().enumerate() {
            let record = record_from_row(idx + 1, row, has_predicted, has_summary)?;
            if index.insert(record.country.clone(), idx).is_some() {
                return Err(SchemaError::DuplicateCountry {
                    country: record.country,
                });
            }
            records.push(record);
        }
        debug!(
            record_count = records.len(),
            has_predicted, has_summary, "record store loaded"
        );
        Ok(Self {
            records,
            columns,
            index,
        })
    }

    /// All records in original row order.
    pub fn all(&self) -> &[CountryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether the source schema carried `name`, regardless of row values.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains(name)
    }

    /// Exact, case-sensitive lookup by country name.
    pub fn find(&self, country: &str) -> Option<&CountryRecord> {
        self.index.get(country).map(|&idx| &self.records[idx])
    }

    /// Selectable country names in store order.
    pub fn country_names(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|record| record.country.as_str())
            .collect()
    }

    /// The selection shown before any change event: the first record.
    pub fn default_selection(&self) -> &str {
        // load() rejects empty tables
        self.records[0].country.as_str()
    }
}

fn record_from_row(
    row_number: usize,
    row: &DatasetRow,
    has_predicted: bool,
    has_summary: bool,
) -> Result<CountryRecord> {
    let predicted_happiness = if has_predicted {
        optional_number(row_number, row, PREDICTED_HAPPINESS)
    } else {
        None
    };
    let ai_summary = if has_summary {
        row.get(AI_SUMMARY)
            .and_then(CellValue::as_text)
            .map(str::to_string)
    } else {
        None
    };
    Ok(CountryRecord {
        country: required_text(row_number, row, COUNTRY)?,
        country_code: required_text(row_number, row, COUNTRY_CODE)?,
        region: required_text(row_number, row, REGION)?,
        happiness_score: required_number(row_number, row, HAPPINESS_SCORE)?,
        gdp_per_capita: required_number(row_number, row, GDP_PER_CAPITA)?,
        education_expenditure_pct_gdp: required_number(row_number, row, EDUCATION_EXPENDITURE)?,
        life_expectancy: required_number(row_number, row, LIFE_EXPECTANCY)?,
        predicted_happiness,
        ai_summary,
    })
}

fn required_cell<'a>(row_number: usize, row: &'a DatasetRow, column: &str) -> Result<&'a CellValue> {
    match row.get(column) {
        Some(cell) if !cell.is_missing() => Ok(cell),
        _ => Err(SchemaError::MissingValue {
            row: row_number,
            column: column.to_string(),
        }),
    }
}

fn required_text(row_number: usize, row: &DatasetRow, column: &str) -> Result<String> {
    match required_cell(row_number, row, column)? {
        CellValue::Number(value) => Ok(value.to_string()),
        cell => cell
            .as_text()
            .map(|text| text.trim().to_string())
            .ok_or_else(|| SchemaError::InvalidValue {
                row: row_number,
                column: column.to_string(),
                expected: "text value",
            }),
    }
}

fn required_number(row_number: usize, row: &DatasetRow, column: &str) -> Result<f64> {
    let cell = required_cell(row_number, row, column)?;
    cell.as_number().ok_or_else(|| SchemaError::InvalidValue {
        row: row_number,
        column: column.to_string(),
        expected: "number",
    })
}

/// Non-numeric optional cells are treated as absent.
fn optional_number(row_number: usize, row: &DatasetRow, column: &str) -> Option<f64> {
    let cell = row.get(column).filter(|cell| !cell.is_missing())?;
    let value = cell.as_number();
    if value.is_none() {
        warn!(row = row_number, column, value = ?cell, "non-numeric optional value ignored");
    }
    value
}
