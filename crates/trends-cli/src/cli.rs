//! CLI argument definitions for the dashboard.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "trends-dashboard",
    version,
    about = "Global Social Trends Dashboard - country indicators and global comparisons",
    long_about = "Show a country's socio-economic indicators alongside global comparison\n\
                  charts (GDP vs happiness scatter, world happiness choropleth) built\n\
                  from a pre-merged country dataset."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Dashboard configuration file (TOML).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the selectable countries.
    Countries(DatasetArgs),

    /// Show the dashboard for one country.
    Show(ShowArgs),

    /// Feed a sequence of selections through one session (last one wins).
    Replay(ReplayArgs),
}

#[derive(Args)]
pub struct DatasetArgs {
    /// Merged dataset CSV, or a directory containing merged_country_data.csv.
    #[arg(value_name = "DATASET")]
    pub dataset: Option<PathBuf>,
}

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Country to show (default: configured default or first row).
    #[arg(long = "country", short = 'c', value_name = "NAME")]
    pub country: Option<String>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormatArg,
}

#[derive(Args)]
pub struct ReplayArgs {
    /// Merged dataset CSV, or a directory containing merged_country_data.csv.
    #[arg(long = "dataset", short = 'd', value_name = "DATASET")]
    pub dataset: Option<PathBuf>,

    /// Selection events, in arrival order.
    #[arg(value_name = "COUNTRY", required = true)]
    pub selections: Vec<String>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Text,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
