use serde::Serialize;

use crate::dataset::classified::ClassifiedRegion;
use crate::model::levels::AlertLevel;
use crate::model::thresholds::{ClassifyError, ThresholdTable};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub parameter: String,
    pub label: String,
    pub unit: String,
    pub value: f64,
    pub level: AlertLevel,
    pub title: String,
    pub recommendation: String,
    pub fallback: bool,
}

/// Per-parameter view of the selected region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsPanel {
    pub region: String,
    pub impact: String,
    pub metrics: Vec<Metric>,
}

pub fn build_metrics_panel(
    thresholds: &ThresholdTable,
    row: &ClassifiedRegion,
) -> Result<MetricsPanel, ClassifyError> {
    let mut metrics = Vec::with_capacity(row.cells.len());
    for cell in &row.cells {
        let spec = thresholds.parameter(&cell.parameter)?;
        let (title, recommendation) = spec
            .band(cell.level)
            .map(|b| (b.title.clone(), b.recommendation.clone()))
            .unwrap_or_default();
        metrics.push(Metric {
            parameter: spec.id.clone(),
            label: spec.label.clone(),
            unit: spec.unit.clone(),
            value: cell.value,
            level: cell.level,
            title,
            recommendation,
            fallback: cell.fallback,
        });
    }
    Ok(MetricsPanel {
        region: row.name.clone(),
        impact: row.impact.clone(),
        metrics,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/panel.rs"]
mod tests;
