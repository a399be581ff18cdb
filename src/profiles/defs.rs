use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::levels::AlertLevel;
use crate::model::thresholds::{ParameterSpec, ThresholdTable};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegionDef {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub impact: String,
    #[serde(default)]
    pub values: BTreeMap<String, f64>,
}

/// One line of the level legend shown next to the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LegendEntry {
    pub level: AlertLevel,
    pub meaning: String,
}

/// Declarative description of one dashboard: tracked parameters with
/// their threshold bands, plus the built-in region rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Parameter ids in the order their advice is listed. Empty means
    /// declaration order.
    #[serde(default)]
    pub advice_order: Vec<String>,
    #[serde(rename = "legend", default)]
    pub legend: Vec<LegendEntry>,
    #[serde(rename = "parameter", default)]
    pub parameters: Vec<ParameterSpec>,
    #[serde(rename = "region", default)]
    pub regions: Vec<RegionDef>,
}

impl Profile {
    pub fn thresholds(&self) -> ThresholdTable {
        ThresholdTable::new(self.parameters.clone())
    }

    /// Parameters with advice, in `advice_order` when one is given.
    pub fn advised_parameters(&self) -> Vec<&ParameterSpec> {
        let ordered: Vec<&ParameterSpec> = if self.advice_order.is_empty() {
            self.parameters.iter().collect()
        } else {
            self.advice_order
                .iter()
                .filter_map(|id| self.parameters.iter().find(|p| &p.id == id))
                .collect()
        };
        ordered.into_iter().filter(|p| !p.advice.is_empty()).collect()
    }

    pub fn parameter_ids(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(|p| p.id.as_str())
    }
}
