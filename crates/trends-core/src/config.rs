//! Dashboard configuration file.
//!
//! ```toml
//! title = "Global Social Trends Dashboard"
//! dataset = "data/merged_country_data.csv"
//! default_country = "Finland"
//!
//! [charts]
//! scatter_title = "GDP per Capita vs Happiness Score"
//! choropleth_title = "World Happiness Map"
//! ```
//!
//! Every key is optional.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::charts::ChartOptions;
use crate::error::{ConfigError, Result};

pub const DEFAULT_TITLE: &str = "Global Social Trends Dashboard";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    pub title: String,
    pub dataset: Option<PathBuf>,
    pub default_country: Option<String>,
    pub charts: ChartsSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartsSection {
    pub scatter_title: String,
    pub choropleth_title: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            dataset: None,
            default_country: None,
            charts: ChartsSection::default(),
        }
    }
}

impl Default for ChartsSection {
    fn default() -> Self {
        let options = ChartOptions::default();
        Self {
            scatter_title: options.scatter_title,
            choropleth_title: options.choropleth_title,
        }
    }
}

impl DashboardConfig {
    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions {
            scatter_title: self.charts.scatter_title.clone(),
            choropleth_title: self.charts.choropleth_title.clone(),
        }
    }

    /// Parse a configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] for malformed documents or unknown keys.
    pub fn from_toml_str(contents: &str, origin: &Path) -> Result<Self> {
        toml::from_str(contents).map_err(|source| ConfigError::Toml {
            path: origin.to_path_buf(),
            source,
        })
    }
}

/// Load the configuration at `path`, or defaults when `path` is `None`.
///
/// # Errors
///
/// Returns [`ConfigError`] when the file cannot be read or parsed.
pub fn load_config(path: Option<&Path>) -> Result<DashboardConfig> {
    let Some(path) = path else {
        return Ok(DashboardConfig::default());
    };
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = DashboardConfig::from_toml_str(&contents, path)?;
    debug!(path = %path.display(), "loaded dashboard config");
    Ok(config)
}
