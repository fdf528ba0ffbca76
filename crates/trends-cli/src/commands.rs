use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use trends_cli::render::{countries_table, render_bundle};
use trends_core::{DashboardConfig, UpdateOrchestrator, load_config};
use trends_ingest::{read_dataset, resolve_dataset_path};
use trends_model::{DashboardBundle, RecordStore};

use crate::cli::{DatasetArgs, OutputFormatArg, ReplayArgs, ShowArgs};

/// Directory searched when neither the command line nor the config names a dataset.
const DEFAULT_DATA_DIR: &str = "data";

pub fn load_dashboard_config(path: Option<&Path>) -> Result<DashboardConfig> {
    load_config(path).context("load dashboard config")
}

/// Read the dataset once and build the shared store.
fn load_store(arg: Option<&Path>, config: &DashboardConfig) -> Result<Arc<RecordStore>> {
    let requested: PathBuf = arg
        .map(Path::to_path_buf)
        .or_else(|| config.dataset.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
    let span = info_span!("load", dataset = %requested.display());
    let _guard = span.enter();
    let path = resolve_dataset_path(&requested)
        .with_context(|| format!("locate dataset: {}", requested.display()))?;
    let table = read_dataset(&path).with_context(|| format!("read dataset: {}", path.display()))?;
    let store = RecordStore::load(&table)
        .with_context(|| format!("invalid dataset: {}", path.display()))?;
    info!(record_count = store.len(), "record store ready");
    Ok(Arc::new(store))
}

fn session(store: Arc<RecordStore>, config: &DashboardConfig) -> UpdateOrchestrator {
    UpdateOrchestrator::new(store)
        .with_options(config.chart_options())
        .with_default_country(config.default_country.clone())
}

pub fn run_countries(args: &DatasetArgs, config: &DashboardConfig) -> Result<()> {
    let store = load_store(args.dataset.as_deref(), config)?;
    println!("{}", countries_table(&store));
    Ok(())
}

pub fn run_show(args: &ShowArgs, config: &DashboardConfig) -> Result<()> {
    let store = load_store(args.dataset.dataset.as_deref(), config)?;
    let mut orchestrator = session(store, config);
    let bundle = match &args.country {
        Some(country) => orchestrator.dispatch(country.as_str()),
        None => orchestrator.initial_bundle(),
    };
    print_bundle(&config.title, &bundle, args.format)
}

pub fn run_replay(args: &ReplayArgs, config: &DashboardConfig) -> Result<()> {
    let store = load_store(args.dataset.as_deref(), config)?;
    let mut orchestrator = session(store, config);
    for selection in &args.selections {
        orchestrator.selection_changed(selection.as_str());
    }
    let Some(outcome) = orchestrator.process() else {
        // clap requires at least one selection
        return Ok(());
    };
    if outcome.superseded > 0 {
        warn!(
            superseded = outcome.superseded,
            selection = %outcome.bundle.selection,
            "earlier selections superseded"
        );
    }
    print_bundle(&config.title, &outcome.bundle, args.format)
}

fn print_bundle(title: &str, bundle: &DashboardBundle, format: OutputFormatArg) -> Result<()> {
    match format {
        OutputFormatArg::Text => println!("{}", render_bundle(title, bundle)),
        OutputFormatArg::Json => {
            let json = serde_json::to_string_pretty(bundle).context("serialize bundle")?;
            println!("{json}");
        }
    }
    Ok(())
}
