use serde::Serialize;

use crate::dataset::classified::{ClassifiedCell, ClassifiedTable};
use crate::model::levels::AlertLevel;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertedRegion {
    pub name: String,
    pub level: AlertLevel,
    pub impact: String,
    pub cells: Vec<ClassifiedCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterAlerts {
    pub parameter: String,
    pub regions: Vec<AlertedRegion>,
}

/// Regions at Orange or Red, grouped by parameter. Parameters without any
/// such region have no entry at all.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct AlertReport {
    pub entries: Vec<ParameterAlerts>,
}

impl AlertReport {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, parameter: &str) -> Option<&ParameterAlerts> {
        self.entries.iter().find(|e| e.parameter == parameter)
    }

    pub fn region_names(&self, parameter: &str) -> Vec<&str> {
        self.get(parameter)
            .map(|e| e.regions.iter().map(|r| r.name.as_str()).collect())
            .unwrap_or_default()
    }
}

/// Entries follow parameter declaration order; regions keep dataset row order.
pub fn aggregate(table: &ClassifiedTable) -> AlertReport {
    let mut entries = Vec::new();
    for param in &table.parameters {
        let regions: Vec<AlertedRegion> = table
            .rows
            .iter()
            .filter_map(|row| {
                let cell = row.cell(param)?;
                cell.level.is_alert().then(|| AlertedRegion {
                    name: row.name.clone(),
                    level: cell.level,
                    impact: row.impact.clone(),
                    cells: row.cells.clone(),
                })
            })
            .collect();
        if !regions.is_empty() {
            entries.push(ParameterAlerts {
                parameter: param.clone(),
                regions,
            });
        }
    }
    AlertReport { entries }
}

#[cfg(test)]
#[path = "../../tests/src_inline/aggregate/alerts.rs"]
mod tests;
