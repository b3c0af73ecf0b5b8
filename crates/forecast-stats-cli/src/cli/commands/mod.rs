use super::args::*;
use anyhow::Result;
use forecast_stats_core::config::path_resolver::PathResolver;
use forecast_stats_core::config::{load_config, StatsConfig};
use std::path::{Path, PathBuf};

pub mod generate;
pub mod validate;

pub mod exit_codes {
    pub const OK: i32 = 0;
    pub const MISSING_INPUT: i32 = 1;
    pub const CONFIG_ERROR: i32 = 2;
    pub const MISSING_COLUMNS: i32 = 2;
}

pub fn dispatch(cli: Cli) -> Result<i32> {
    match cli.cmd {
        Command::Generate(args) => generate::run(args),
        Command::Validate(args) => validate::run(args),
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(exit_codes::OK)
        }
    }
}

/// Config file (if any) with command-line overrides applied.
pub(crate) fn build_config(src: &SourceArgs) -> Result<StatsConfig> {
    let mut cfg = match &src.config {
        Some(path) => load_config(path, src.strict_config)?,
        None => StatsConfig::default(),
    };
    if let Some(input) = &src.input {
        cfg.input = input.clone();
    }
    if let Some(name) = &src.forecaster {
        cfg.forecaster = name.clone();
    }
    Ok(cfg)
}

pub(crate) fn resolve_path(src: &SourceArgs, p: &Path) -> PathBuf {
    PathResolver::new(&src.repo_root).resolve(p)
}

pub(crate) fn report_missing_input(cfg: &StatsConfig, input: &Path) {
    eprintln!(
        "Error: {} not found at {}",
        cfg.input.display(),
        input.display()
    );
    eprintln!("Please export your Fatebook data and place it in the repository root.");
}
