//! Country record and dataset column names.

use serde::{Deserialize, Serialize};

pub const COUNTRY: &str = "Country";
pub const COUNTRY_CODE: &str = "Country Code";
pub const REGION: &str = "Region";
pub const HAPPINESS_SCORE: &str = "Happiness Score";
pub const GDP_PER_CAPITA: &str = "GDP per Capita";
pub const EDUCATION_EXPENDITURE: &str = "Education Expenditure";
pub const LIFE_EXPECTANCY: &str = "Life Expectancy";
pub const PREDICTED_HAPPINESS: &str = "Predicted Happiness";
pub const AI_SUMMARY: &str = "AI Summary";

/// Columns every dataset must carry.
pub const MANDATORY_COLUMNS: [&str; 7] = [
    COUNTRY,
    COUNTRY_CODE,
    REGION,
    HAPPINESS_SCORE,
    GDP_PER_CAPITA,
    EDUCATION_EXPENDITURE,
    LIFE_EXPECTANCY,
];

/// Columns whose presence switches optional dashboard content on.
pub const OPTIONAL_COLUMNS: [&str; 2] = [PREDICTED_HAPPINESS, AI_SUMMARY];

/// One country's indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub country: String,
    pub country_code: String,
    pub region: String,
    pub happiness_score: f64,
    pub gdp_per_capita: f64,
    pub education_expenditure_pct_gdp: f64,
    pub life_expectancy: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_happiness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,
}
