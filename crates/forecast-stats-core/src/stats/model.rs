use chrono::{NaiveDate, Weekday};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// The anonymized statistics document.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    pub generated: NaiveDate,
    pub summary: Summary,
    pub calibration: Vec<CalibrationBucket>,
    pub day_of_week: WeekdayBreakdown,
    pub monthly_activity: BTreeMap<String, MonthActivity>,
    pub categories: BTreeMap<String, CategoryStats>,
    pub confidence_distribution: Vec<ConfidenceRange>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total: usize,
    pub resolved: usize,
    pub pending: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub brier_score: Option<f64>,
    pub avg_confidence: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalibrationBucket {
    pub bucket: String,
    pub count: usize,
    /// Resolved YES within the bucket.
    #[serde(rename = "correct")]
    pub yes_count: usize,
    pub actual_rate: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct DayTally {
    pub made: usize,
    pub resolved: usize,
    pub correct: usize,
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct MonthActivity {
    pub made: usize,
    pub resolved: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    pub count: usize,
    pub correct: usize,
    pub brier_score: Option<f64>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ConfidenceRange {
    pub range: String,
    pub count: usize,
}

pub const WEEKDAYS: [(Weekday, &str); 7] = [
    (Weekday::Mon, "Monday"),
    (Weekday::Tue, "Tuesday"),
    (Weekday::Wed, "Wednesday"),
    (Weekday::Thu, "Thursday"),
    (Weekday::Fri, "Friday"),
    (Weekday::Sat, "Saturday"),
    (Weekday::Sun, "Sunday"),
];

/// Per-weekday tallies, serialized as a map keyed by day name in
/// Monday-first order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekdayBreakdown {
    days: Vec<DayTally>,
}

impl WeekdayBreakdown {
    /// All seven days present, zeroed.
    pub fn week() -> Self {
        Self {
            days: vec![DayTally::default(); 7],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn get(&self, day: Weekday) -> Option<&DayTally> {
        self.days.get(day.num_days_from_monday() as usize)
    }

    pub fn get_mut(&mut self, day: Weekday) -> Option<&mut DayTally> {
        self.days.get_mut(day.num_days_from_monday() as usize)
    }
}

impl Serialize for WeekdayBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for ((_, name), tally) in WEEKDAYS.iter().zip(&self.days) {
            map.serialize_entry(name, tally)?;
        }
        map.end()
    }
}
