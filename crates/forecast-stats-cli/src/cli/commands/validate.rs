use super::{build_config, exit_codes, report_missing_input, resolve_path};
use crate::cli::args::{ReportFormat, ValidateArgs};
use anyhow::Result;
use forecast_stats_core::loader::{load_records, read_table};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ValidationReport {
    input: String,
    forecaster: String,
    rows_read: usize,
    kept: usize,
    author_mismatch: usize,
    missing_probability: usize,
    invalid_probability: usize,
    missing_columns: Vec<String>,
}

pub fn run(args: ValidateArgs) -> Result<i32> {
    let cfg = build_config(&args.source)?;
    let input = resolve_path(&args.source, &cfg.input);

    if !input.exists() {
        report_missing_input(&cfg, &input);
        return Ok(exit_codes::MISSING_INPUT);
    }

    let table = read_table(&input)?;
    let loaded = load_records(&table.rows, &cfg);
    let report = ValidationReport {
        input: input.display().to_string(),
        forecaster: cfg.forecaster.clone(),
        rows_read: loaded.rows_read,
        kept: loaded.records.len(),
        author_mismatch: loaded.author_mismatch,
        missing_probability: loaded.missing_probability,
        invalid_probability: loaded.invalid_probability,
        missing_columns: table.missing_columns(&cfg.columns),
    };

    if args.format == ReportFormat::Json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Input: {}", report.input);
        println!("Rows: {}", report.rows_read);
        println!("Kept: {} (forecaster '{}')", report.kept, report.forecaster);
        println!("Skipped, other author: {}", report.author_mismatch);
        println!("Skipped, missing probability: {}", report.missing_probability);
        println!("Skipped, invalid probability: {}", report.invalid_probability);
        if report.missing_columns.is_empty() {
            println!("✅ All required columns present");
        } else {
            for c in &report.missing_columns {
                println!("❌ Missing column: {}", c);
            }
        }
    }

    if report.missing_columns.is_empty() {
        Ok(exit_codes::OK)
    } else {
        Ok(exit_codes::MISSING_COLUMNS)
    }
}
