use super::{build_config, exit_codes, report_missing_input, resolve_path};
use crate::cli::args::GenerateArgs;
use anyhow::Result;
use forecast_stats_core::loader::{load_records, read_table};
use forecast_stats_core::report::console::print_summary;
use forecast_stats_core::report::json::{render, write_report};
use forecast_stats_core::stats::calculate_stats;

pub fn run(args: GenerateArgs) -> Result<i32> {
    let mut cfg = build_config(&args.source)?;
    if let Some(out) = &args.output {
        cfg.output = out.clone();
    }
    let input = resolve_path(&args.source, &cfg.input);
    let output = resolve_path(&args.source, &cfg.output);

    if !input.exists() {
        report_missing_input(&cfg, &input);
        return Ok(exit_codes::MISSING_INPUT);
    }

    // In dry-run mode stdout carries only the document.
    let progress = |msg: String| {
        if !args.dry_run {
            println!("{}", msg);
        }
    };

    progress(format!("Loading forecasts from {}...", input.display()));
    let table = read_table(&input)?;
    let loaded = load_records(&table.rows, &cfg);
    progress(format!(
        "Found {} forecasts by '{}'",
        loaded.records.len(),
        cfg.forecaster
    ));
    tracing::info!(
        event = "export_loaded",
        rows = loaded.rows_read,
        kept = loaded.records.len(),
        skipped = loaded.skipped()
    );

    progress("Calculating statistics...".to_string());
    let report = calculate_stats(&loaded.records, chrono::Local::now().date_naive());

    if args.dry_run {
        println!("{}", render(&report)?);
        return Ok(exit_codes::OK);
    }

    progress(format!("Writing anonymized stats to {}...", output.display()));
    write_report(&report, &output)?;
    progress("Done!".to_string());
    print_summary(&report);

    Ok(exit_codes::OK)
}
