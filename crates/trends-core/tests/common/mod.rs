#![allow(dead_code)]

use trends_model::record::{
    AI_SUMMARY, COUNTRY, COUNTRY_CODE, EDUCATION_EXPENDITURE, GDP_PER_CAPITA, HAPPINESS_SCORE,
    LIFE_EXPECTANCY, PREDICTED_HAPPINESS, REGION,
};
use trends_model::{DatasetRow, DatasetTable, MANDATORY_COLUMNS, RecordStore};

pub struct Country {
    pub name: &'static str,
    pub code: &'static str,
    pub region: &'static str,
    pub happiness: f64,
    pub gdp: f64,
    pub education: f64,
    pub life_expectancy: f64,
}

pub const FINLAND: Country = Country {
    name: "Finland",
    code: "FIN",
    region: "Europe",
    happiness: 7.8,
    gdp: 1.3,
    education: 7.1,
    life_expectancy: 81.9,
};

pub const CHAD: Country = Country {
    name: "Chad",
    code: "TCD",
    region: "Africa",
    happiness: 4.3,
    gdp: 0.2,
    education: 2.5,
    life_expectancy: 54.0,
};

pub fn row(country: &Country) -> DatasetRow {
    DatasetRow::new()
        .with(COUNTRY, country.name)
        .with(COUNTRY_CODE, country.code)
        .with(REGION, country.region)
        .with(HAPPINESS_SCORE, country.happiness)
        .with(GDP_PER_CAPITA, country.gdp)
        .with(EDUCATION_EXPENDITURE, country.education)
        .with(LIFE_EXPECTANCY, country.life_expectancy)
}

pub fn mandatory_table() -> DatasetTable {
    DatasetTable::new(MANDATORY_COLUMNS.iter().map(|c| String::from(*c)).collect())
}

/// The two-country scenario without optional columns.
pub fn scenario_store() -> RecordStore {
    let mut table = mandatory_table();
    table.push_row(row(&FINLAND));
    table.push_row(row(&CHAD));
    RecordStore::load(&table).expect("load store")
}

/// The same scenario with predicted happiness and AI summaries.
pub fn scenario_store_with_optionals() -> RecordStore {
    let mut table = mandatory_table();
    table.columns.push(PREDICTED_HAPPINESS.to_string());
    table.columns.push(AI_SUMMARY.to_string());
    table.push_row(
        row(&FINLAND)
            .with(PREDICTED_HAPPINESS, 7.65)
            .with(AI_SUMMARY, "High trust and strong public services.\nStable outlook."),
    );
    table.push_row(row(&CHAD).with(PREDICTED_HAPPINESS, 4.1));
    RecordStore::load(&table).expect("load store")
}
