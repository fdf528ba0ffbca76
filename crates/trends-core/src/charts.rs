//! Global comparison charts.
//!
//! Both builders are pure functions of the store: the same store always
//! yields the same specs, and the current selection plays no part.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use trends_model::record::{
    COUNTRY, COUNTRY_CODE, GDP_PER_CAPITA, HAPPINESS_SCORE, LIFE_EXPECTANCY, REGION,
};
use trends_model::{
    ChartKind, ChartRow, ChartSpec, ColorMode, ColorScale, CountryRecord, FieldBindings,
    FieldValue, RecordStore,
};

pub const DEFAULT_SCATTER_TITLE: &str = "GDP per Capita vs Happiness Score";
pub const DEFAULT_CHOROPLETH_TITLE: &str = "World Happiness Map";

/// Presentation options for the chart builders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub scatter_title: String,
    pub choropleth_title: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            scatter_title: DEFAULT_SCATTER_TITLE.to_string(),
            choropleth_title: DEFAULT_CHOROPLETH_TITLE.to_string(),
        }
    }
}

/// GDP per capita against happiness, colored by region, sized by life expectancy.
pub fn build_scatter(store: &RecordStore) -> ChartSpec {
    build_scatter_with(store, &ChartOptions::default())
}

pub fn build_scatter_with(store: &RecordStore, options: &ChartOptions) -> ChartSpec {
    let bindings = FieldBindings {
        x: Some(GDP_PER_CAPITA.to_string()),
        y: Some(HAPPINESS_SCORE.to_string()),
        color: Some(REGION.to_string()),
        size: Some(LIFE_EXPECTANCY.to_string()),
        hover_label: Some(COUNTRY.to_string()),
        location_key: None,
    };
    ChartSpec {
        kind: ChartKind::Scatter,
        title: options.scatter_title.clone(),
        rows: chart_rows(store, &bindings),
        bindings,
        color_mode: ColorMode::Categorical,
        color_scale: None,
    }
}

/// Happiness score by country code on the Plasma scale.
pub fn build_choropleth(store: &RecordStore) -> ChartSpec {
    build_choropleth_with(store, &ChartOptions::default())
}

pub fn build_choropleth_with(store: &RecordStore, options: &ChartOptions) -> ChartSpec {
    let bindings = FieldBindings {
        color: Some(HAPPINESS_SCORE.to_string()),
        hover_label: Some(COUNTRY.to_string()),
        location_key: Some(COUNTRY_CODE.to_string()),
        ..FieldBindings::default()
    };
    ChartSpec {
        kind: ChartKind::Choropleth,
        title: options.choropleth_title.clone(),
        rows: chart_rows(store, &bindings),
        bindings,
        color_mode: ColorMode::Continuous,
        color_scale: Some(ColorScale::plasma()),
    }
}

fn chart_rows(store: &RecordStore, bindings: &FieldBindings) -> Vec<ChartRow> {
    let fields = bindings.fields();
    store
        .all()
        .iter()
        .map(|record| {
            let values: BTreeMap<String, FieldValue> = fields
                .iter()
                .filter_map(|field| {
                    field_value(record, field).map(|value| ((*field).to_string(), value))
                })
                .collect();
            ChartRow { values }
        })
        .collect()
}

fn field_value(record: &CountryRecord, field: &str) -> Option<FieldValue> {
    let value = match field {
        COUNTRY => FieldValue::Text(record.country.clone()),
        COUNTRY_CODE => FieldValue::Text(record.country_code.clone()),
        REGION => FieldValue::Text(record.region.clone()),
        HAPPINESS_SCORE => FieldValue::Number(record.happiness_score),
        GDP_PER_CAPITA => FieldValue::Number(record.gdp_per_capita),
        LIFE_EXPECTANCY => FieldValue::Number(record.life_expectancy),
        _ => return None,
    };
    Some(value)
}
