//! Integration tests for reading the merged country CSV.

use std::fs;
use std::path::PathBuf;

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use tempfile::TempDir;
use trends_ingest::{IngestError, read_dataset, resolve_dataset_path, table_from_frame};
use trends_model::record::{AI_SUMMARY, PREDICTED_HAPPINESS};
use trends_model::{CellValue, RecordStore, SchemaError};

const HEADER: &str =
    "Country,Country Code,Region,Happiness Score,GDP per Capita,Education Expenditure,Life Expectancy";

fn write_csv(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write csv");
    path
}

#[test]
fn reads_mandatory_columns_into_store() {
    let dir = TempDir::new().unwrap();
    let contents = format!("{HEADER}\nFinland,FIN,Europe,7.8,1.3,7.1,81.9\nChad,TCD,Africa,4.3,0.2,2.5,54.0\n");
    let path = write_csv(&dir, "merged_country_data.csv", &contents);

    let table = read_dataset(&path).expect("read dataset");
    assert_eq!(table.columns.len(), 7);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(
        table.rows[1].get("Life Expectancy"),
        Some(&CellValue::Number(54.0))
    );

    let store = RecordStore::load(&table).expect("load store");
    assert_eq!(store.country_names(), vec!["Finland", "Chad"]);
    assert!(!store.has_column(PREDICTED_HAPPINESS));
    assert!((store.all()[0].happiness_score - 7.8).abs() < 1e-9);
}

#[test]
fn reads_optional_columns_with_gaps() {
    let dir = TempDir::new().unwrap();
    let contents = format!(
        "{HEADER},Predicted Happiness,AI Summary\n\
         Finland,FIN,Europe,7.8,1.3,7.1,81.9,7.6,\"Happy, healthy and well educated.\"\n\
         Chad,TCD,Africa,4.3,0.2,2.5,54.0,,\n"
    );
    let path = write_csv(&dir, "merged_country_data.csv", &contents);

    let store = RecordStore::load(&read_dataset(&path).expect("read dataset")).expect("load");
    assert!(store.has_column(PREDICTED_HAPPINESS));
    assert!(store.has_column(AI_SUMMARY));
    let finland = &store.all()[0];
    let chad = &store.all()[1];
    assert_eq!(finland.predicted_happiness, Some(7.6));
    assert_eq!(
        finland.ai_summary.as_deref(),
        Some("Happy, healthy and well educated.")
    );
    assert_eq!(chad.predicted_happiness, None);
    assert_eq!(chad.ai_summary, None);
}

#[test]
fn missing_mandatory_column_fails_store_load() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "data.csv",
        "Country,Country Code,Region,Happiness Score\nFinland,FIN,Europe,7.8\n",
    );
    let table = read_dataset(&path).expect("read dataset");
    let err = RecordStore::load(&table).unwrap_err();
    assert_eq!(
        err,
        SchemaError::MissingColumn {
            column: "GDP per Capita".to_string()
        }
    );
}

#[test]
fn header_only_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "data.csv", &format!("{HEADER}\n"));
    let err = read_dataset(&path).unwrap_err();
    assert!(matches!(err, IngestError::EmptyCsv { .. }), "{err:?}");
}

#[test]
fn unparseable_predicted_value_is_absent() {
    let dir = TempDir::new().unwrap();
    let contents = format!(
        "{HEADER},Predicted Happiness\n\
         Finland,FIN,Europe,7.8,1.3,7.1,81.9,7.6\n\
         Chad,TCD,Africa,4.3,0.2,2.5,54.0,N/A\n"
    );
    let path = write_csv(&dir, "merged_country_data.csv", &contents);

    let store = RecordStore::load(&read_dataset(&path).expect("read dataset")).expect("load");
    assert!(store.has_column(PREDICTED_HAPPINESS));
    assert_eq!(store.all()[0].predicted_happiness, Some(7.6));
    assert_eq!(store.all()[1].predicted_happiness, None);
}

#[test]
fn numeric_country_codes_stay_text() {
    let dir = TempDir::new().unwrap();
    let contents = format!(
        "{HEADER}\n\
         Afghanistan,004,Asia,2.4,0.1,3.2,62.9\n\
         Chad,148,Africa,4.3,0.2,2.5,54.0\n"
    );
    let path = write_csv(&dir, "merged_country_data.csv", &contents);

    let table = read_dataset(&path).expect("read dataset");
    assert_eq!(
        table.rows[0].get("Country Code"),
        Some(&CellValue::Text("004".to_string()))
    );
    let store = RecordStore::load(&table).expect("load store");
    assert_eq!(store.all()[0].country_code, "004");
    assert_eq!(store.all()[1].country_code, "148");
}

#[test]
fn directory_argument_finds_dataset() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "merged_country_data.csv",
        &format!("{HEADER}\nFinland,FIN,Europe,7.8,1.3,7.1,81.9\n"),
    );
    assert_eq!(resolve_dataset_path(dir.path()).unwrap(), path);
}

#[test]
fn converts_in_memory_frame() {
    let columns: Vec<Column> = vec![
        Series::new("Country".into(), vec!["Finland", "Chad"]).into_column(),
        Series::new(" Happiness  Score ".into(), vec![7.8f64, 4.3]).into_column(),
    ];
    let df = DataFrame::new(columns).unwrap();
    let table = table_from_frame(&df).expect("convert frame");
    assert_eq!(table.columns, vec!["Country", "Happiness Score"]);
    assert_eq!(
        table.rows[0].get("Country"),
        Some(&CellValue::Text("Finland".to_string()))
    );
    assert_eq!(
        table.rows[1].get("Happiness Score"),
        Some(&CellValue::Number(4.3))
    );
}
