use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::levels::AlertLevel;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedCell {
    pub parameter: String,
    pub value: f64,
    pub level: AlertLevel,
    pub fallback: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedRegion {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub impact: String,
    pub cells: Vec<ClassifiedCell>,
}

impl ClassifiedRegion {
    pub fn cell(&self, parameter: &str) -> Option<&ClassifiedCell> {
        self.cells.iter().find(|c| c.parameter == parameter)
    }
}

/// The dataset with one derived alert level per region and parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedTable {
    pub parameters: Vec<String>,
    pub rows: Vec<ClassifiedRegion>,
}

impl ClassifiedTable {
    pub fn row(&self, name: &str) -> Option<&ClassifiedRegion> {
        self.rows.iter().find(|r| r.name == name)
    }

    /// Per-level region counts for one parameter; every level is present.
    pub fn level_counts(&self, parameter: &str) -> BTreeMap<AlertLevel, usize> {
        let mut counts: BTreeMap<AlertLevel, usize> =
            AlertLevel::ordered().iter().map(|l| (*l, 0)).collect();
        for row in &self.rows {
            if let Some(cell) = row.cell(parameter) {
                *counts.entry(cell.level).or_insert(0) += 1;
            }
        }
        counts
    }

    pub fn fallback_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|r| r.cells.iter())
            .filter(|c| c.fallback)
            .count()
    }
}
