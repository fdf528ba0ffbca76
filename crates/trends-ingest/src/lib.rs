//! CSV dataset provider for the social trends dashboard.
//!
//! Reads the pre-merged country dataset with polars and hands it to the
//! record store as typed rows. No cleaning or merging happens here.

pub mod discovery;
pub mod error;
pub mod polars_utils;
pub mod reader;

pub use discovery::{DEFAULT_DATASET_FILE, discover_dataset, list_csv_files, resolve_dataset_path};
pub use error::{IngestError, Result};
pub use polars_utils::any_to_cell;
pub use reader::{normalize_header, read_dataset, table_from_frame};
