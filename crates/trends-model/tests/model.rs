//! Tests for trends-model types.

use trends_model::record::{
    COUNTRY, COUNTRY_CODE, EDUCATION_EXPENDITURE, GDP_PER_CAPITA, HAPPINESS_SCORE,
    LIFE_EXPECTANCY, REGION,
};
use trends_model::{CellValue, DatasetRow, DatasetTable, MANDATORY_COLUMNS, RecordStore};

fn country_row(country: &str, code: &str, region: &str, values: [f64; 4]) -> DatasetRow {
    DatasetRow::new()
        .with(COUNTRY, country)
        .with(COUNTRY_CODE, code)
        .with(REGION, region)
        .with(HAPPINESS_SCORE, values[0])
        .with(GDP_PER_CAPITA, values[1])
        .with(EDUCATION_EXPENDITURE, values[2])
        .with(LIFE_EXPECTANCY, values[3])
}

fn sample_store() -> RecordStore {
    let mut table = DatasetTable::new(MANDATORY_COLUMNS.iter().map(|c| String::from(*c)).collect());
    table.push_row(country_row("Finland", "FIN", "Europe", [7.8, 1.3, 7.1, 81.9]));
    table.push_row(country_row("Chad", "TCD", "Africa", [4.3, 0.2, 2.5, 54.0]));
    table.push_row(country_row("Peru", "PER", "Americas", [5.8, 0.9, 3.8, 76.7]));
    RecordStore::load(&table).expect("load store")
}

#[test]
fn store_preserves_row_order() {
    let store = sample_store();
    assert_eq!(store.len(), 3);
    assert_eq!(store.country_names(), vec!["Finland", "Chad", "Peru"]);
    assert_eq!(store.default_selection(), "Finland");
}

#[test]
fn find_is_exact_and_case_sensitive() {
    let store = sample_store();
    let chad = store.find("Chad").expect("Chad present");
    assert_eq!(chad.country_code, "TCD");
    assert!((chad.life_expectancy - 54.0).abs() < f64::EPSILON);
    assert!(store.find("chad").is_none());
    assert!(store.find("Cha").is_none());
}

#[test]
fn numeric_text_cells_load_as_numbers() {
    let mut table = DatasetTable::new(MANDATORY_COLUMNS.iter().map(|c| String::from(*c)).collect());
    table.push_row(
        country_row("Finland", "FIN", "Europe", [7.8, 1.3, 7.1, 81.9])
            .with(HAPPINESS_SCORE, CellValue::Text("7.75".to_string())),
    );
    let store = RecordStore::load(&table).expect("load store");
    assert!((store.all()[0].happiness_score - 7.75).abs() < f64::EPSILON);
}

#[test]
fn record_serializes_without_absent_optionals() {
    let store = sample_store();
    let json = serde_json::to_value(&store.all()[0]).expect("serialize record");
    assert_eq!(json["country"], "Finland");
    assert!(json.get("predicted_happiness").is_none());
    assert!(json.get("ai_summary").is_none());
}
