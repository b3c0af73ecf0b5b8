use super::model::{
    CalibrationBucket, CategoryStats, ConfidenceRange, MonthActivity, Summary, WeekdayBreakdown,
};
use super::round_to;
use crate::model::{ForecastRecord, Resolution};
use chrono::Datelike;
use std::collections::BTreeMap;

pub const CALIBRATION_BUCKETS: [&str; 10] = [
    "0-10", "10-20", "20-30", "30-40", "40-50", "50-60", "60-70", "70-80", "80-90", "90-100",
];

/// Label, inclusive lower bound, exclusive upper bound (the last range also
/// includes 100).
pub const CONFIDENCE_RANGES: [(&str, f64, f64); 4] = [
    ("0-25", 0.0, 25.0),
    ("25-50", 25.0, 50.0),
    ("50-75", 50.0, 75.0),
    ("75-100", 75.0, 100.0),
];

fn mean(sum: f64, n: usize) -> Option<f64> {
    (n > 0).then(|| sum / n as f64)
}

pub fn summarize(
    records: &[ForecastRecord],
    resolved: &[&ForecastRecord],
    correct: &[&ForecastRecord],
) -> Summary {
    let total = records.len();
    let brier_sum: f64 = resolved.iter().filter_map(|r| r.brier()).sum();
    let confidence_sum: f64 = records.iter().map(|r| r.confidence_pct()).sum();

    Summary {
        total,
        resolved: resolved.len(),
        pending: total - resolved.len(),
        correct: correct.len(),
        incorrect: resolved.len() - correct.len(),
        brier_score: mean(brier_sum, resolved.len()).map(|b| round_to(b, 3)),
        avg_confidence: mean(confidence_sum, total)
            .map(|c| round_to(c, 1))
            .unwrap_or(0.0),
    }
}

/// Index into [`CALIBRATION_BUCKETS`]; 100% lands in the last bucket.
pub fn calibration_bucket(probability: f64) -> usize {
    let idx = (probability * 100.0 / 10.0).floor();
    (idx.max(0.0) as usize).min(CALIBRATION_BUCKETS.len() - 1)
}

pub fn calibration(resolved: &[&ForecastRecord]) -> Vec<CalibrationBucket> {
    let mut counts = [(0usize, 0usize); 10];
    for r in resolved {
        let slot = &mut counts[calibration_bucket(r.probability)];
        slot.0 += 1;
        if r.resolution == Resolution::Yes {
            slot.1 += 1;
        }
    }

    CALIBRATION_BUCKETS
        .iter()
        .zip(counts)
        .map(|(label, (count, yes_count))| CalibrationBucket {
            bucket: label.to_string(),
            count,
            yes_count,
            actual_rate: mean(yes_count as f64, count).map(|r| round_to(r, 3)),
        })
        .collect()
}

/// Three separate tallies over three populations. `resolved` and `correct`
/// are not reconciled against each other.
pub fn day_of_week(
    records: &[ForecastRecord],
    resolved: &[&ForecastRecord],
    correct: &[&ForecastRecord],
) -> WeekdayBreakdown {
    let mut week = WeekdayBreakdown::week();

    for d in records.iter().filter_map(|r| r.forecast_date) {
        if let Some(t) = week.get_mut(d.weekday()) {
            t.made += 1;
        }
    }

    for d in resolved.iter().filter_map(|r| r.resolved_date) {
        if let Some(t) = week.get_mut(d.weekday()) {
            t.resolved += 1;
        }
    }

    for d in correct.iter().filter_map(|r| r.resolved_date) {
        if let Some(t) = week.get_mut(d.weekday()) {
            t.correct += 1;
        }
    }

    week
}

/// Keyed by `YYYY-MM`. A record may count as made in one month and resolved
/// in another.
pub fn monthly_activity(records: &[ForecastRecord]) -> BTreeMap<String, MonthActivity> {
    let mut monthly: BTreeMap<String, MonthActivity> = BTreeMap::new();

    for d in records.iter().filter_map(|r| r.forecast_date) {
        monthly.entry(d.format("%Y-%m").to_string()).or_default().made += 1;
    }

    for d in records.iter().filter_map(|r| r.resolved_date) {
        monthly.entry(d.format("%Y-%m").to_string()).or_default().resolved += 1;
    }

    monthly
}

pub fn categories(records: &[ForecastRecord]) -> BTreeMap<String, CategoryStats> {
    #[derive(Default)]
    struct Acc {
        count: usize,
        resolved: usize,
        correct: usize,
        brier_sum: f64,
    }

    let mut acc: BTreeMap<String, Acc> = BTreeMap::new();
    for r in records {
        let a = acc.entry(r.category()).or_default();
        a.count += 1;

        if let Some(brier) = r.brier() {
            a.resolved += 1;
            a.brier_sum += brier;
            if r.is_correct() {
                a.correct += 1;
            }
        }
    }

    acc.into_iter()
        .map(|(name, a)| {
            let stats = CategoryStats {
                count: a.count,
                correct: a.correct,
                brier_score: mean(a.brier_sum, a.resolved).map(|b| round_to(b, 3)),
            };
            (name, stats)
        })
        .collect()
}

pub fn confidence_distribution(records: &[ForecastRecord]) -> Vec<ConfidenceRange> {
    CONFIDENCE_RANGES
        .iter()
        .map(|&(label, min, max)| {
            let count = records
                .iter()
                .map(|r| r.confidence_pct())
                .filter(|&pct| (min <= pct && pct < max) || (max == 100.0 && pct == 100.0))
                .count();
            ConfidenceRange {
                range: label.to_string(),
                count,
            }
        })
        .collect()
}
