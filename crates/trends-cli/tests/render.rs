//! Integration tests for terminal rendering.

use trends_cli::render::{chart_heading, chart_table, countries_table, indicator_lines, render_bundle};
use trends_core::handle;
use trends_model::record::{
    AI_SUMMARY, COUNTRY, COUNTRY_CODE, EDUCATION_EXPENDITURE, GDP_PER_CAPITA, HAPPINESS_SCORE,
    LIFE_EXPECTANCY, REGION,
};
use trends_model::{DatasetRow, DatasetTable, MANDATORY_COLUMNS, RecordStore};

fn test_store() -> RecordStore {
    let mut table = DatasetTable::new(MANDATORY_COLUMNS.iter().map(|c| String::from(*c)).collect());
    table.columns.push(AI_SUMMARY.to_string());
    table.push_row(
        DatasetRow::new()
            .with(COUNTRY, "Finland")
            .with(COUNTRY_CODE, "FIN")
            .with(REGION, "Europe")
            .with(HAPPINESS_SCORE, 7.8)
            .with(GDP_PER_CAPITA, 1.3)
            .with(EDUCATION_EXPENDITURE, 7.1)
            .with(LIFE_EXPECTANCY, 81.9)
            .with(AI_SUMMARY, "Consistently the happiest country."),
    );
    table.push_row(
        DatasetRow::new()
            .with(COUNTRY, "Chad")
            .with(COUNTRY_CODE, "TCD")
            .with(REGION, "Africa")
            .with(HAPPINESS_SCORE, 4.3)
            .with(GDP_PER_CAPITA, 0.2)
            .with(EDUCATION_EXPENDITURE, 2.5)
            .with(LIFE_EXPECTANCY, 54.0),
    );
    RecordStore::load(&table).expect("load store")
}

#[test]
fn indicator_lines_for_resolved_country() {
    let store = test_store();
    let bundle = handle(&store, "Chad");
    insta::assert_snapshot!(indicator_lines(&bundle).join("\n"), @r"
    Happiness Score: 4.3
    GDP per Capita: 0.2
    Education Expenditure (% GDP): 2.5
    Life Expectancy: 54
    ");
}

#[test]
fn indicator_lines_for_unknown_country() {
    let store = test_store();
    let bundle = handle(&store, "Atlantis");
    assert_eq!(
        indicator_lines(&bundle),
        vec!["Unknown selection 'Atlantis': no indicators available.".to_string()]
    );
}

#[test]
fn chart_headings_describe_encoding() {
    let store = test_store();
    let bundle = handle(&store, "Finland");
    assert_eq!(
        chart_heading(&bundle.scatter),
        "GDP per Capita vs Happiness Score [scatter, 2 rows, color: Region]"
    );
    assert_eq!(
        chart_heading(&bundle.choropleth),
        "World Happiness Map [choropleth, 2 rows, color: Happiness Score (Plasma)]"
    );
}

#[test]
fn chart_table_has_one_row_per_country() {
    let store = test_store();
    let bundle = handle(&store, "Finland");
    let mut table = chart_table(&bundle.choropleth);
    assert_eq!(table.column_count(), 3);
    assert_eq!(table.row_iter().count(), 2);
    let rendered = table.to_string();
    assert!(rendered.contains("TCD"));
    assert!(rendered.contains("7.8"));
}

#[test]
fn countries_table_lists_store_order() {
    let store = test_store();
    let rendered = countries_table(&store).to_string();
    let finland = rendered.find("Finland").expect("Finland listed");
    let chad = rendered.find("Chad").expect("Chad listed");
    assert!(finland < chad);
}

#[test]
fn full_rendering_includes_summary_only_when_present() {
    let store = test_store();
    let finland = render_bundle("Dashboard", &handle(&store, "Finland"));
    assert!(finland.starts_with("Dashboard\n========="));
    assert!(finland.contains("Country: Finland"));
    assert!(finland.contains("Global Comparisons"));
    assert!(finland.contains("Consistently the happiest country."));

    let chad = render_bundle("Dashboard", &handle(&store, "Chad"));
    assert!(!chad.contains("AI Summary"));
}
