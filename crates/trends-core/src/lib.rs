//! Dashboard pipeline: selection resolution, indicator formatting, global
//! comparison charts, and the update orchestrator that ties them together.
//!
//! Every function here takes the [`RecordStore`](trends_model::RecordStore)
//! explicitly and owns no shared mutable state, so a single store can serve
//! many sessions at once.

pub mod charts;
pub mod config;
pub mod error;
pub mod indicators;
pub mod orchestrator;
pub mod resolver;

pub use charts::{ChartOptions, build_choropleth, build_choropleth_with, build_scatter, build_scatter_with};
pub use config::{DashboardConfig, load_config};
pub use error::ConfigError;
pub use indicators::{format_indicators, format_number};
pub use orchestrator::{OrchestratorState, UpdateOrchestrator, UpdateOutcome, handle, handle_with};
pub use resolver::resolve;
