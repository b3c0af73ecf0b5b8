use chrono::NaiveDate;
use std::collections::HashMap;

/// One CSV row keyed by header name.
pub type RawRow = HashMap<String, String>;

pub const UNCATEGORIZED: &str = "uncategorized";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    Yes,
    No,
    /// Anything other than YES/NO, including an empty cell. Counts as pending.
    Other,
}

impl Resolution {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_uppercase().as_str() {
            "YES" => Resolution::Yes,
            "NO" => Resolution::No,
            _ => Resolution::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRecord {
    pub question: String,
    /// Stated confidence that the question resolves YES, in [0, 1].
    pub probability: f64,
    pub forecast_date: Option<NaiveDate>,
    pub resolution: Resolution,
    pub resolved_date: Option<NaiveDate>,
    /// Brier score as reported by the export. Not used for aggregation.
    pub reported_brier: Option<f64>,
    /// Raw comma-separated tag list.
    pub tags: String,
}

impl ForecastRecord {
    pub fn is_resolved(&self) -> bool {
        matches!(self.resolution, Resolution::Yes | Resolution::No)
    }

    /// A resolved forecast is correct when it leaned the right way.
    /// Exactly 0.5 counts as leaning YES.
    pub fn is_correct(&self) -> bool {
        match self.resolution {
            Resolution::Yes => self.probability >= 0.5,
            Resolution::No => self.probability < 0.5,
            Resolution::Other => false,
        }
    }

    /// 1.0 for YES, 0.0 for NO, `None` while pending.
    pub fn outcome(&self) -> Option<f64> {
        match self.resolution {
            Resolution::Yes => Some(1.0),
            Resolution::No => Some(0.0),
            Resolution::Other => None,
        }
    }

    pub fn brier(&self) -> Option<f64> {
        self.outcome().map(|o| (self.probability - o).powi(2))
    }

    pub fn confidence_pct(&self) -> f64 {
        self.probability * 100.0
    }

    /// First tag, trimmed and lowercased.
    pub fn category(&self) -> String {
        match self.tags.split(',').next().map(str::trim) {
            Some(first) if !first.is_empty() => first.to_lowercase(),
            _ => UNCATEGORIZED.to_string(),
        }
    }
}

#[cfg(test)]
impl ForecastRecord {
    /// Undated, untagged record for unit tests.
    pub(crate) fn with_outcome(probability: f64, resolution: Resolution) -> Self {
        Self {
            question: String::new(),
            probability,
            forecast_date: None,
            resolution,
            resolved_date: None,
            reported_brier: None,
            tags: String::new(),
        }
    }
}
