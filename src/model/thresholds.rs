use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::model::levels::AlertLevel;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClassifyError {
    #[error("unknown parameter: {0}")]
    UnknownParameter(String),
}

/// One inclusive `[min, max]` range of a parameter's threshold table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThresholdBand {
    pub level: AlertLevel,
    pub min: f64,
    pub max: f64,
    pub title: String,
    pub recommendation: String,
}

impl ThresholdBand {
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// A tracked parameter together with its ordered threshold bands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterSpec {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub report_title: String,
    /// Heading of the advice block, e.g. "vent violent". Defaults to the
    /// lowercased report heading.
    #[serde(default)]
    pub advice_title: String,
    #[serde(default)]
    pub advice: Vec<String>,
    #[serde(rename = "band", default)]
    pub bands: Vec<ThresholdBand>,
}

/// Result of a lookup. `fallback` is set when no band matched and the
/// lowest level was assigned by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub level: AlertLevel,
    pub fallback: bool,
}

impl ParameterSpec {
    /// First band in declaration order whose inclusive range holds `value`.
    pub fn classify(&self, value: f64) -> Classification {
        for band in &self.bands {
            if band.contains(value) {
                return Classification {
                    level: band.level,
                    fallback: false,
                };
            }
        }
        warn!(
            parameter = self.id.as_str(),
            value, "value outside every threshold band, using lowest level"
        );
        Classification {
            level: AlertLevel::lowest(),
            fallback: true,
        }
    }

    pub fn band(&self, level: AlertLevel) -> Option<&ThresholdBand> {
        self.bands.iter().find(|b| b.level == level)
    }

    pub fn heading(&self) -> &str {
        if self.report_title.is_empty() {
            &self.label
        } else {
            &self.report_title
        }
    }

    pub fn advice_heading(&self) -> String {
        if self.advice_title.is_empty() {
            self.heading().to_lowercase()
        } else {
            self.advice_title.clone()
        }
    }

    pub fn label_with_unit(&self) -> String {
        if self.unit.is_empty() {
            self.label.clone()
        } else {
            format!("{} ({})", self.label, self.unit)
        }
    }
}

/// Read-only per-parameter threshold lookup, built once per profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdTable {
    parameters: Vec<ParameterSpec>,
}

impl ThresholdTable {
    pub fn new(parameters: Vec<ParameterSpec>) -> Self {
        Self { parameters }
    }

    pub fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(|p| p.id.as_str())
    }

    pub fn parameter(&self, id: &str) -> Result<&ParameterSpec, ClassifyError> {
        self.parameters
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| ClassifyError::UnknownParameter(id.to_string()))
    }

    pub fn classify(&self, value: f64, parameter: &str) -> Result<Classification, ClassifyError> {
        Ok(self.parameter(parameter)?.classify(value))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/thresholds.rs"]
mod tests;
