//! Declarative chart specifications.
//!
//! A [`ChartSpec`] names the chart kind, which dataset columns feed each
//! visual channel, and the rows themselves. Rendering is left entirely to
//! the presentation layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Scatter,
    Choropleth,
}

/// How the color channel is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// One discrete color per distinct value.
    Categorical,
    /// Values mapped onto a continuous [`ColorScale`].
    Continuous,
}

/// Ordered color stops, lowest value first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScale {
    pub name: String,
    pub stops: Vec<String>,
}

const PLASMA_STOPS: [&str; 10] = [
    "#0d0887", "#46039f", "#7201a8", "#9c179e", "#bd3786", "#d8576b", "#ed7953", "#fb9f3a",
    "#fdca26", "#f0f921",
];

impl ColorScale {
    /// The sequential, perceptually ordered Plasma scale.
    pub fn plasma() -> Self {
        Self {
            name: "Plasma".to_string(),
            stops: PLASMA_STOPS.iter().map(|stop| stop.to_string()).collect(),
        }
    }
}

/// Column bound to each visual channel. Unused channels stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldBindings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_key: Option<String>,
}

impl FieldBindings {
    /// Bound column names, deduplicated, in channel order.
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        for field in [
            &self.x,
            &self.y,
            &self.color,
            &self.size,
            &self.hover_label,
            &self.location_key,
        ]
        .into_iter()
        .flatten()
        {
            if !fields.contains(&field.as_str()) {
                fields.push(field.as_str());
            }
        }
        fields
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(value) => Some(*value),
            FieldValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text.as_str()),
            FieldValue::Number(_) => None,
        }
    }
}

/// One data row, keyed by column name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChartRow {
    pub values: BTreeMap<String, FieldValue>,
}

impl ChartRow {
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub bindings: FieldBindings,
    pub color_mode: ColorMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_scale: Option<ColorScale>,
    pub rows: Vec<ChartRow>,
}

impl ChartSpec {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of one bound column across all rows, in row order.
    pub fn field_values(&self, field: &str) -> Vec<&FieldValue> {
        self.rows.iter().filter_map(|row| row.get(field)).collect()
    }
}
