//! Terminal rendering of dashboard bundles.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use trends_core::format_number;
use trends_model::{ChartKind, ChartSpec, DashboardBundle, FieldValue, RecordStore};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

/// Selectable countries in store order.
pub fn countries_table(store: &RecordStore) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Country"),
        header_cell("Code"),
        header_cell("Region"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (idx, record) in store.all().iter().enumerate() {
        table.add_row(vec![
            Cell::new(idx + 1),
            Cell::new(&record.country).add_attribute(Attribute::Bold),
            Cell::new(&record.country_code),
            Cell::new(&record.region),
        ]);
    }
    table
}

/// One row per data point, one column per bound field.
pub fn chart_table(spec: &ChartSpec) -> Table {
    let fields = spec.bindings.fields();
    let mut table = Table::new();
    table.set_header(fields.iter().map(|field| header_cell(field)).collect::<Vec<_>>());
    apply_table_style(&mut table);
    for row in &spec.rows {
        table.add_row(
            fields
                .iter()
                .map(|field| value_cell(row.get(field)))
                .collect::<Vec<_>>(),
        );
    }
    for (idx, field) in fields.iter().enumerate() {
        let numeric = spec
            .rows
            .first()
            .and_then(|row| row.get(field))
            .and_then(FieldValue::as_number)
            .is_some();
        if numeric {
            align_column(&mut table, idx, CellAlignment::Right);
        }
    }
    table
}

/// Indicator section as `"Label: value"` lines, or a notice for unknown selections.
pub fn indicator_lines(bundle: &DashboardBundle) -> Vec<String> {
    if bundle.is_resolved() {
        bundle.indicators.to_lines()
    } else {
        vec![format!(
            "Unknown selection '{}': no indicators available.",
            bundle.selection
        )]
    }
}

/// Chart heading: title, kind, point count and color encoding.
pub fn chart_heading(spec: &ChartSpec) -> String {
    let kind = match spec.kind {
        ChartKind::Scatter => "scatter",
        ChartKind::Choropleth => "choropleth",
    };
    let color = match (&spec.bindings.color, &spec.color_scale) {
        (Some(field), Some(scale)) => format!(", color: {field} ({})", scale.name),
        (Some(field), None) => format!(", color: {field}"),
        _ => String::new(),
    };
    format!("{} [{kind}, {} rows{color}]", spec.title, spec.row_count())
}

/// Full text rendering of a bundle.
pub fn render_bundle(title: &str, bundle: &DashboardBundle) -> String {
    let mut lines = vec![title.to_string(), "=".repeat(title.chars().count())];
    lines.push(format!("Country: {}", bundle.selection));
    lines.push(String::new());
    lines.extend(indicator_lines(bundle));
    lines.push(String::new());
    lines.push("Global Comparisons".to_string());
    for spec in [&bundle.scatter, &bundle.choropleth] {
        lines.push(String::new());
        lines.push(chart_heading(spec));
        lines.push(chart_table(spec).to_string());
    }
    if !bundle.summary_text.is_empty() {
        lines.push(String::new());
        lines.push("AI Summary".to_string());
        lines.push(bundle.summary_text.clone());
    }
    lines.join("\n")
}

fn value_cell(value: Option<&FieldValue>) -> Cell {
    match value {
        Some(FieldValue::Number(number)) => Cell::new(format_number(*number)),
        Some(FieldValue::Text(text)) => Cell::new(text),
        None => Cell::new("-").fg(Color::DarkGrey),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
