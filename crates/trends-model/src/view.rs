//! Per-selection outputs consumed by a presentation layer.

use serde::{Deserialize, Serialize};

use crate::chart::ChartSpec;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indicator {
    pub label: String,
    pub value: String,
}

/// Ordered `(label, value)` pairs for the selected country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndicatorView {
    pub entries: Vec<Indicator>,
}

impl IndicatorView {
    pub fn push(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.entries.push(Indicator {
            label: label.into(),
            value: value.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Indicator> {
        self.entries.iter()
    }

    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.value.as_str())
    }

    pub fn pairs(&self) -> Vec<(&str, &str)> {
        self.entries
            .iter()
            .map(|entry| (entry.label.as_str(), entry.value.as_str()))
            .collect()
    }

    /// `"Label: value"` lines, one per indicator.
    pub fn to_lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| format!("{}: {}", entry.label, entry.value))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStatus {
    Resolved,
    UnknownSelection,
}

/// Everything the presentation layer renders for one selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardBundle {
    pub selection: String,
    pub status: SelectionStatus,
    pub indicators: IndicatorView,
    pub scatter: ChartSpec,
    pub choropleth: ChartSpec,
    pub summary_text: String,
}

impl DashboardBundle {
    pub fn is_resolved(&self) -> bool {
        self.status == SelectionStatus::Resolved
    }
}
