//! Selection-change handling.
//!
//! [`handle`] is the pure per-event transition. [`UpdateOrchestrator`] wraps
//! it with the per-session event bookkeeping:
//!
//! ```text
//! Idle --selection_changed--> (pending) --process--> Resolving --completed--> Idle
//! ```
//!
//! Pending selections follow last-write-wins: a newer selection replaces one
//! that has not been processed yet.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info_span, warn};
use trends_model::{DashboardBundle, IndicatorView, RecordStore, SelectionStatus};

use crate::charts::{ChartOptions, build_choropleth_with, build_scatter_with};
use crate::indicators::format_indicators;
use crate::resolver::resolve;

/// Build the dashboard bundle for one selection with default chart options.
pub fn handle(store: &RecordStore, country: &str) -> DashboardBundle {
    handle_with(store, country, &ChartOptions::default())
}

/// Build the dashboard bundle for one selection.
///
/// An unknown country never aborts chart generation: the bundle carries
/// empty indicators and summary text plus both global charts.
pub fn handle_with(store: &RecordStore, country: &str, options: &ChartOptions) -> DashboardBundle {
    let scatter = build_scatter_with(store, options);
    let choropleth = build_choropleth_with(store, options);
    match resolve(store, country) {
        Ok(record) => DashboardBundle {
            selection: record.country.clone(),
            status: SelectionStatus::Resolved,
            indicators: format_indicators(record, store),
            scatter,
            choropleth,
            summary_text: record.ai_summary.clone().unwrap_or_default(),
        },
        Err(error) => {
            warn!(country = %error.country, "unknown selection; showing global charts only");
            DashboardBundle {
                selection: error.country,
                status: SelectionStatus::UnknownSelection,
                indicators: IndicatorView::default(),
                scatter,
                choropleth,
                summary_text: String::new(),
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrchestratorState {
    Idle,
    Resolving,
}

/// Result of processing the latest pending selection.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOutcome {
    pub bundle: DashboardBundle,
    /// Selections replaced before they were processed.
    pub superseded: usize,
}

/// One presentation session's view onto a shared store.
#[derive(Debug)]
pub struct UpdateOrchestrator {
    store: Arc<RecordStore>,
    options: ChartOptions,
    default_country: Option<String>,
    state: OrchestratorState,
    pending: Option<String>,
    superseded: usize,
    current: Option<String>,
}

impl UpdateOrchestrator {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self {
            store,
            options: ChartOptions::default(),
            default_country: None,
            state: OrchestratorState::Idle,
            pending: None,
            superseded: 0,
            current: None,
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }

    /// Prefer `country` as the first selection when the store has it.
    #[must_use]
    pub fn with_default_country(mut self, country: Option<String>) -> Self {
        self.default_country = country;
        self
    }

    pub fn state(&self) -> OrchestratorState {
        self.state
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Last selection that completed processing.
    pub fn current_selection(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn pending_selection(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Selection shown before any change event.
    pub fn default_selection(&self) -> &str {
        match &self.default_country {
            Some(country) if self.store.find(country).is_some() => country.as_str(),
            _ => self.store.default_selection(),
        }
    }

    /// Bundle for the default selection.
    pub fn initial_bundle(&mut self) -> DashboardBundle {
        let country = self.default_selection().to_string();
        self.dispatch(country)
    }

    /// Record a selection-change event. Replaces any unprocessed selection.
    pub fn selection_changed(&mut self, country: impl Into<String>) {
        let country = country.into();
        if let Some(previous) = self.pending.replace(country) {
            self.superseded += 1;
            debug!(superseded = %previous, "pending selection replaced");
        }
    }

    /// Process the most recent pending selection, if any.
    pub fn process(&mut self) -> Option<UpdateOutcome> {
        let country = self.pending.take()?;
        Some(self.run(country))
    }

    /// Process `country` immediately, superseding any pending selection.
    pub fn dispatch(&mut self, country: impl Into<String>) -> DashboardBundle {
        if let Some(previous) = self.pending.take() {
            self.superseded += 1;
            debug!(superseded = %previous, "pending selection replaced");
        }
        self.run(country.into()).bundle
    }

    fn run(&mut self, country: String) -> UpdateOutcome {
        let superseded = std::mem::take(&mut self.superseded);
        let span = info_span!("selection", country = %country);
        let _guard = span.enter();

        self.state = OrchestratorState::Resolving;
        let start = Instant::now();
        let bundle = handle_with(&self.store, &country, &self.options);
        self.state = OrchestratorState::Idle;

        debug!(
            resolved = bundle.is_resolved(),
            indicator_count = bundle.indicators.len(),
            superseded,
            duration_ms = start.elapsed().as_millis(),
            "selection handled"
        );
        self.current = Some(bundle.selection.clone());
        UpdateOutcome { bundle, superseded }
    }
}
