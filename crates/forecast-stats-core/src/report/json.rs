use crate::stats::model::StatsReport;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Two-space indented JSON.
pub fn render(report: &StatsReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("failed to serialize stats report")
}

/// Writes the report through a temp file in the destination directory, so an
/// interrupted run never leaves a truncated document behind.
pub fn write_report(report: &StatsReport, path: &Path) -> Result<()> {
    let rendered = render(report)?;

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory: {}", dir.display()))?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
    tmp.write_all(rendered.as_bytes())?;
    tmp.flush()?;
    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("failed to write stats report: {}", path.display()))?;

    tracing::debug!(event = "report_written", path = %path.display(), bytes = rendered.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::calculate_stats;
    use chrono::NaiveDate;

    #[test]
    fn test_empty_document_shape() {
        let report = StatsReport::empty(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
        let v: serde_json::Value = serde_json::from_str(&render(&report).unwrap()).unwrap();

        assert_eq!(v["generated"], "2025-02-01");
        assert_eq!(v["summary"]["total"], 0);
        assert!(v["summary"]["brierScore"].is_null());
        assert_eq!(v["summary"]["avgConfidence"], 0.0);
        assert_eq!(v["calibration"], serde_json::json!([]));
        assert_eq!(v["dayOfWeek"], serde_json::json!({}));
        assert_eq!(v["monthlyActivity"], serde_json::json!({}));
        assert_eq!(v["categories"], serde_json::json!({}));
        assert_eq!(v["confidenceDistribution"], serde_json::json!([]));
    }

    #[test]
    fn test_key_order_and_indent() {
        let report = calculate_stats(&[], NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
        let text = render(&report).unwrap();
        let keys = [
            "\"generated\"",
            "\"summary\"",
            "\"calibration\"",
            "\"dayOfWeek\"",
            "\"monthlyActivity\"",
            "\"categories\"",
            "\"confidenceDistribution\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| text.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(text.contains("\n  \"summary\": {\n    \"total\": 0,"));
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("stats.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "stale").unwrap();

        let report = StatsReport::empty(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
        write_report(&report, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render(&report).unwrap());
        assert_eq!(std::fs::read_dir(path.parent().unwrap()).unwrap().count(), 1);
    }
}
