use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "forecast-stats",
    version,
    about = "Anonymized calibration statistics from a Fatebook forecast export"
)]
pub struct Cli {
    /// tracing filter directive, e.g. `info` or `forecast_stats_core=debug`
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load the export, aggregate it and write the stats document
    Generate(GenerateArgs),
    /// Check the export's columns and report how many rows would be kept
    Validate(ValidateArgs),
    Version,
}

#[derive(clap::Args, Debug, Clone)]
pub struct SourceArgs {
    /// YAML stats config (forecaster, paths, column names)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Relative input/output paths are resolved against this directory
    #[arg(long, default_value = ".")]
    pub repo_root: PathBuf,

    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Only forecasts by this author are counted (case-insensitive)
    #[arg(long)]
    pub forecaster: Option<String>,

    /// Reject unknown keys in the config file instead of warning
    #[arg(long)]
    pub strict_config: bool,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Print the document to stdout instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}
