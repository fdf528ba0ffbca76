//! Indicator formatting for the selected country.

use trends_model::record::PREDICTED_HAPPINESS;
use trends_model::{CountryRecord, IndicatorView, RecordStore};

pub const HAPPINESS_SCORE_LABEL: &str = "Happiness Score";
pub const GDP_PER_CAPITA_LABEL: &str = "GDP per Capita";
pub const EDUCATION_EXPENDITURE_LABEL: &str = "Education Expenditure (% GDP)";
pub const LIFE_EXPECTANCY_LABEL: &str = "Life Expectancy";
pub const PREDICTED_HAPPINESS_LABEL: &str = "Predicted Happiness Score";

/// Rendered in place of a null predicted value.
pub const NOT_AVAILABLE: &str = "n/a";

/// Build the ordered indicator list for `record`.
///
/// The predicted-happiness entry depends on the store schema only: when the
/// column exists every record gets the entry, even if its own value is null.
pub fn format_indicators(record: &CountryRecord, store: &RecordStore) -> IndicatorView {
    let mut view = IndicatorView::default();
    view.push(HAPPINESS_SCORE_LABEL, format_number(record.happiness_score));
    view.push(GDP_PER_CAPITA_LABEL, format_number(record.gdp_per_capita));
    view.push(
        EDUCATION_EXPENDITURE_LABEL,
        format_number(record.education_expenditure_pct_gdp),
    );
    view.push(LIFE_EXPECTANCY_LABEL, format_number(record.life_expectancy));
    if store.has_column(PREDICTED_HAPPINESS) {
        let value = record
            .predicted_happiness
            .map_or_else(|| NOT_AVAILABLE.to_string(), format_number);
        view.push(PREDICTED_HAPPINESS_LABEL, value);
    }
    view
}

/// Shortest decimal form that round-trips to the same `f64`.
pub fn format_number(value: f64) -> String {
    if value.is_finite() {
        format!("{value}")
    } else {
        NOT_AVAILABLE.to_string()
    }
}
