//! Record loading for forecast exports.
//!
//! Rows are filtered to one forecaster and to parseable probabilities. Nothing
//! below the file level is fatal: bad probabilities drop the row, bad dates
//! become absent, unknown resolutions count as pending.

use crate::config::{ColumnNames, StatsConfig};
use crate::model::{ForecastRecord, RawRow, Resolution};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::io::Read;
use std::path::Path;

const UTF8_BOM: char = '\u{feff}';

/// Header plus rows of a CSV export, in file order.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl CsvTable {
    /// Required columns absent from the header.
    pub fn missing_columns(&self, columns: &ColumnNames) -> Vec<String> {
        columns
            .required()
            .iter()
            .filter(|c| !self.headers.iter().any(|h| h == *c))
            .map(|c| c.to_string())
            .collect()
    }
}

pub fn read_table(path: &Path) -> Result<CsvTable> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open forecast export: {}", path.display()))?;
    parse_table(file).with_context(|| format!("failed to parse CSV: {}", path.display()))
}

pub fn parse_table<R: Read>(input: R) -> Result<CsvTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(input);

    let mut headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    if let Some(first) = headers.first_mut() {
        if first.starts_with(UTF8_BOM) {
            *first = first.trim_start_matches(UTF8_BOM).to_string();
        }
    }

    let mut rows = Vec::new();
    for (idx, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("malformed CSV record {}", idx + 1))?;
        let row: RawRow = headers
            .iter()
            .zip(rec.iter())
            .map(|(h, v)| (h.clone(), v.to_string()))
            .collect();
        rows.push(row);
    }

    Ok(CsvTable { headers, rows })
}

/// Records kept by [`load_records`] plus how many rows were dropped and why.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadOutcome {
    pub records: Vec<ForecastRecord>,
    pub rows_read: usize,
    pub author_mismatch: usize,
    pub missing_probability: usize,
    pub invalid_probability: usize,
}

impl LoadOutcome {
    pub fn skipped(&self) -> usize {
        self.author_mismatch + self.missing_probability + self.invalid_probability
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbabilityError {
    Missing,
    Invalid,
}

pub fn load_records(rows: &[RawRow], cfg: &StatsConfig) -> LoadOutcome {
    let cols = &cfg.columns;
    let forecaster = cfg.forecaster.to_lowercase();
    let mut out = LoadOutcome {
        rows_read: rows.len(),
        ..Default::default()
    };

    for (idx, row) in rows.iter().enumerate() {
        if cell(row, &cols.forecast_by).to_lowercase() != forecaster {
            out.author_mismatch += 1;
            continue;
        }

        let probability = match parse_probability(cell(row, &cols.probability)) {
            Ok(p) => p,
            Err(ProbabilityError::Missing) => {
                tracing::debug!(event = "row_skipped", row = idx + 1, reason = "missing_probability");
                out.missing_probability += 1;
                continue;
            }
            Err(ProbabilityError::Invalid) => {
                tracing::debug!(
                    event = "row_skipped",
                    row = idx + 1,
                    reason = "invalid_probability",
                    value = cell(row, &cols.probability)
                );
                out.invalid_probability += 1;
                continue;
            }
        };

        out.records.push(ForecastRecord {
            question: cell(row, &cols.question).trim().to_string(),
            probability,
            forecast_date: parse_date(cell(row, &cols.forecast_date)),
            resolution: Resolution::parse(cell(row, &cols.resolution)),
            resolved_date: parse_date(cell(row, &cols.resolved_at)),
            reported_brier: cell(row, &cols.brier).trim().parse().ok(),
            tags: cell(row, &cols.tags).trim().to_string(),
        });
    }

    tracing::debug!(
        event = "records_loaded",
        kept = out.records.len(),
        author_mismatch = out.author_mismatch,
        missing_probability = out.missing_probability,
        invalid_probability = out.invalid_probability
    );

    out
}

fn cell<'a>(row: &'a RawRow, column: &str) -> &'a str {
    row.get(column).map(String::as_str).unwrap_or("")
}

/// Parses a stated probability. Values must be finite and within [0, 1].
pub fn parse_probability(raw: &str) -> Result<f64, ProbabilityError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(ProbabilityError::Missing);
    }
    match s.parse::<f64>() {
        Ok(p) if p.is_finite() && (0.0..=1.0).contains(&p) => Ok(p),
        _ => Err(ProbabilityError::Invalid),
    }
}

/// Parses the date portion of a timestamp, dropping anything after the first
/// space or `T`. Accepts `YYYY-MM-DD` and `MM/DD/YYYY`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.split(' ').next()?.split('T').next()?;
    if date_part.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(date_part, "%m/%d/%Y"))
        .ok()
}
