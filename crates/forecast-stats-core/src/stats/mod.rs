//! Aggregate statistics over loaded forecast records.
//!
//! Each reducer in [`reducers`] produces one section of the [`StatsReport`];
//! [`calculate_stats`] derives the resolved and correct subsets once and
//! assembles the sections.

pub mod model;
pub mod reducers;

use crate::model::ForecastRecord;
use chrono::NaiveDate;
use self::model::{StatsReport, Summary, WeekdayBreakdown};
use std::collections::BTreeMap;

/// Rounds on the exact decimal expansion of `value`; exact ties go to the
/// even digit.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}

pub fn calculate_stats(records: &[ForecastRecord], generated: NaiveDate) -> StatsReport {
    if records.is_empty() {
        return StatsReport::empty(generated);
    }

    let resolved: Vec<&ForecastRecord> = records.iter().filter(|r| r.is_resolved()).collect();
    let correct: Vec<&ForecastRecord> = resolved
        .iter()
        .copied()
        .filter(|r| r.is_correct())
        .collect();

    StatsReport {
        generated,
        summary: reducers::summarize(records, &resolved, &correct),
        calibration: reducers::calibration(&resolved),
        day_of_week: reducers::day_of_week(records, &resolved, &correct),
        monthly_activity: reducers::monthly_activity(records),
        categories: reducers::categories(records),
        confidence_distribution: reducers::confidence_distribution(records),
    }
}

impl StatsReport {
    /// Document for a corpus with no records: every section empty.
    pub fn empty(generated: NaiveDate) -> Self {
        Self {
            generated,
            summary: Summary::default(),
            calibration: Vec::new(),
            day_of_week: WeekdayBreakdown::default(),
            monthly_activity: BTreeMap::new(),
            categories: BTreeMap::new(),
            confidence_distribution: Vec::new(),
        }
    }

    /// `correct/resolved`, as printed in the run summary.
    pub fn accuracy_fraction(&self) -> String {
        format!("{}/{}", self.summary.correct, self.summary.resolved)
    }
}
