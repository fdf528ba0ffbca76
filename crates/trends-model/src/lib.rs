//! Data model for the social trends dashboard: country records, the
//! immutable record store, and the chart and indicator outputs built from it.

pub mod chart;
pub mod error;
pub mod record;
pub mod store;
pub mod table;
pub mod view;

pub use chart::{ChartKind, ChartRow, ChartSpec, ColorMode, ColorScale, FieldBindings, FieldValue};
pub use error::{NotFoundError, Result, SchemaError};
pub use record::{CountryRecord, MANDATORY_COLUMNS, OPTIONAL_COLUMNS};
pub use store::RecordStore;
pub use table::{CellValue, DatasetRow, DatasetTable};
pub use view::{DashboardBundle, Indicator, IndicatorView, SelectionStatus};
