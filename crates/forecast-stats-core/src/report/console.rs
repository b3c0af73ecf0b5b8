use crate::stats::model::StatsReport;

pub fn format_summary(report: &StatsReport) -> String {
    let s = &report.summary;
    let brier = s
        .brier_score
        .map(|b| b.to_string())
        .unwrap_or_else(|| "None".into());

    let mut out = String::from("Summary:\n");
    out.push_str(&format!("  Total predictions: {}\n", s.total));
    out.push_str(&format!("  Resolved: {}\n", s.resolved));
    out.push_str(&format!("  Brier score: {}\n", brier));
    out.push_str(&format!("  Accuracy: {} correct\n", report.accuracy_fraction()));
    out
}

pub fn print_summary(report: &StatsReport) {
    println!("\n{}", format_summary(report).trim_end());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ForecastRecord, Resolution};
    use crate::stats::calculate_stats;
    use chrono::NaiveDate;

    #[test]
    fn test_format_summary() {
        let rec = ForecastRecord::with_outcome;
        let report = calculate_stats(
            &[rec(0.9, Resolution::Yes), rec(0.2, Resolution::No), rec(0.6, Resolution::Other)],
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
        );
        let text = format_summary(&report);
        assert!(text.contains("Total predictions: 3"));
        assert!(text.contains("Resolved: 2"));
        assert!(text.contains("Brier score: 0.025"));
        assert!(text.contains("Accuracy: 2/2 correct"));
    }

    #[test]
    fn test_format_summary_without_resolved() {
        let report = StatsReport::empty(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
        assert!(format_summary(&report).contains("Brier score: None"));
    }
}
