use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod path_resolver;

pub const SUPPORTED_CONFIG_VERSION: u32 = 1;

pub const DEFAULT_FORECASTER: &str = "ash";
pub const DEFAULT_INPUT: &str = "fatebook-forecasts.csv";
pub const DEFAULT_OUTPUT: &str = "fatebook-stats.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StatsConfig {
    #[serde(rename = "configVersion", alias = "version")]
    pub version: u32,
    /// Only rows authored by this name (case-insensitive) are kept.
    pub forecaster: String,
    pub input: PathBuf,
    pub output: PathBuf,
    pub columns: ColumnNames,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            version: SUPPORTED_CONFIG_VERSION,
            forecaster: DEFAULT_FORECASTER.to_string(),
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            columns: ColumnNames::default(),
        }
    }
}

/// Header names of the forecast export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColumnNames {
    pub question: String,
    pub forecast_by: String,
    pub probability: String,
    pub forecast_date: String,
    pub resolution: String,
    pub resolved_at: String,
    pub brier: String,
    pub tags: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            question: "Question title".into(),
            forecast_by: "Forecast created by".into(),
            probability: "Forecast (scale = 0-1)".into(),
            forecast_date: "Forecast created at".into(),
            resolution: "Resolution".into(),
            resolved_at: "Resolved at".into(),
            brier: "Your Brier score for this question".into(),
            tags: "Question tags".into(),
        }
    }
}

impl ColumnNames {
    pub fn required(&self) -> [&str; 8] {
        [
            &self.question,
            &self.forecast_by,
            &self.probability,
            &self.forecast_date,
            &self.resolution,
            &self.resolved_at,
            &self.brier,
            &self.tags,
        ]
    }
}

pub fn load_config(path: &Path, strict: bool) -> Result<StatsConfig, ConfigError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ConfigError(format!("failed to read config {}: {}", path.display(), e)))?;

    parse_config(&raw, strict).map_err(|ConfigError(msg)| {
        ConfigError(format!("{} (file: {})", msg, path.display()))
    })
}

pub fn parse_config(raw: &str, strict: bool) -> Result<StatsConfig, ConfigError> {
    // An empty document means "all defaults".
    if raw.trim().is_empty() {
        return Ok(StatsConfig::default());
    }

    let mut ignored_keys = std::collections::BTreeSet::new();
    let deserializer = serde_yaml::Deserializer::from_str(raw);

    let cfg: StatsConfig = serde_ignored::deserialize(deserializer, |path| {
        ignored_keys.insert(path.to_string());
    })
    .map_err(|e| ConfigError(format!("failed to parse YAML: {}", e)))?;

    if !ignored_keys.is_empty() {
        if strict {
            return Err(ConfigError(format!(
                "unknown fields detected in strict mode: {:?}",
                ignored_keys
            )));
        }
        tracing::warn!(event = "config_unknown_keys", keys = ?ignored_keys);
    }

    if cfg.version != 0 && cfg.version != SUPPORTED_CONFIG_VERSION {
        return Err(ConfigError(format!(
            "unsupported config version {} (supported: 0, {})",
            cfg.version, SUPPORTED_CONFIG_VERSION
        )));
    }

    if cfg.forecaster.trim().is_empty() {
        return Err(ConfigError("forecaster name must not be empty".into()));
    }

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(parse_config("", false).unwrap(), StatsConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let cfg = parse_config(
            "configVersion: 1\nforecaster: Sam\ncolumns:\n  tags: Tags\n",
            false,
        )
        .unwrap();
        assert_eq!(cfg.forecaster, "Sam");
        assert_eq!(cfg.columns.tags, "Tags");
        assert_eq!(cfg.columns.resolution, "Resolution");
        assert_eq!(cfg.input, PathBuf::from(DEFAULT_INPUT));
    }

    #[test]
    fn test_unknown_keys() {
        let raw = "forecaster: ash\nbogus: 1\n";
        assert!(parse_config(raw, false).is_ok());
        let err = parse_config(raw, true).unwrap_err();
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn test_unsupported_version() {
        let err = parse_config("configVersion: 7\n", false).unwrap_err();
        assert!(err.to_string().contains("unsupported config version 7"));
    }

    #[test]
    fn test_load_config_reports_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.yaml");
        std::fs::write(&path, "forecaster: \"\"\n").unwrap();
        let err = load_config(&path, false).unwrap_err();
        assert!(err.to_string().contains("forecaster name must not be empty"));
        assert!(err.to_string().contains("stats.yaml"));
    }
}
