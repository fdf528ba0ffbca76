//! Merged-dataset CSV reader.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use polars::prelude::{CsvReadOptions, DataFrame, DataType, Schema, SerReader};
use tracing::{debug, info};
use trends_model::record::{AI_SUMMARY, COUNTRY, COUNTRY_CODE, REGION};
use trends_model::{DatasetRow, DatasetTable};

use crate::error::{IngestError, Result};
use crate::polars_utils::any_to_cell;

/// Rows inspected when polars infers column dtypes.
const INFER_SCHEMA_ROWS: usize = 100;

/// Columns always read as strings, whatever their values look like.
const TEXT_COLUMNS: [&str; 4] = [COUNTRY, COUNTRY_CODE, REGION, AI_SUMMARY];

/// Trims whitespace and BOM markers and collapses inner whitespace.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Reads the merged CSV at `path` into a [`DatasetTable`].
pub fn read_dataset(path: &Path) -> Result<DatasetTable> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let start = Instant::now();
    let text_schema = text_column_schema(path)?;
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .with_schema_overwrite(Some(Arc::new(text_schema)))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    if df.height() == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    let table = table_from_frame(&df)?;
    info!(
        path = %path.display(),
        row_count = table.rows.len(),
        column_count = table.columns.len(),
        duration_ms = start.elapsed().as_millis(),
        "dataset read"
    );
    Ok(table)
}

/// Header columns that must stay strings, keyed by their raw header text.
fn text_column_schema(path: &Path) -> Result<Schema> {
    let mut header = String::new();
    BufReader::new(File::open(path).map_err(|e| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?)
    .read_line(&mut header)
    .map_err(|e| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut schema = Schema::default();
    let header = header.trim_start_matches('\u{feff}').trim_end_matches(['\r', '\n']);
    for raw in header.split(',') {
        let raw = raw.trim_matches('"');
        if TEXT_COLUMNS.contains(&normalize_header(raw).as_str()) {
            schema.with_column(raw.into(), DataType::String);
        }
    }
    Ok(schema)
}

/// Converts a frame into provider rows, preserving row and column order.
pub fn table_from_frame(df: &DataFrame) -> Result<DatasetTable> {
    let columns: Vec<String> = df
        .get_columns()
        .iter()
        .map(|column| normalize_header(column.name().as_str()))
        .collect();
    let mut rows = vec![DatasetRow::new(); df.height()];
    for (name, column) in columns.iter().zip(df.get_columns()) {
        debug!(column = %name, dtype = %column.dtype(), "converting column");
        for (idx, row) in rows.iter_mut().enumerate() {
            let value = column.get(idx)?;
            row.cells.insert(name.clone(), any_to_cell(value));
        }
    }
    Ok(DatasetTable { columns, rows })
}
