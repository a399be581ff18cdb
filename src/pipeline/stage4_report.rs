use std::path::Path;

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::aggregate::alerts::{AlertReport, aggregate};
use crate::dataset::DatasetError;
use crate::model::thresholds::ClassifyError;
use crate::pipeline::stage1_load::SessionCtx;
use crate::pipeline::stage2_update::Selection;
use crate::pipeline::stage3_classify::{ClassifyContext, LevelSummary};
use crate::report::json::{write_map, write_summary};
use crate::report::map::build_map_layer;
use crate::report::panel::{MetricsPanel, build_metrics_panel};
use crate::report::text::render_report;

#[derive(Debug, Error)]
pub enum Stage4Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("classify error: {0}")]
    Classify(#[from] ClassifyError),
    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),
}

#[derive(Debug, Clone, Serialize)]
pub struct FinalSummary {
    pub tool: ToolSummary,
    pub profile: ProfileSummary,
    pub selected: MetricsPanel,
    pub levels: LevelSummary,
    pub map_parameter: String,
    pub no_danger: bool,
    pub alerts: AlertReport,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolSummary {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummary {
    pub id: String,
    pub title: String,
    pub n_regions: usize,
    pub parameters: Vec<String>,
    pub updated_fields: usize,
}

pub fn run_stage4_report(
    ctx: &SessionCtx,
    selection: &Selection,
    classify: &ClassifyContext,
    map_parameter: Option<&str>,
    out_dir: &Path,
) -> Result<FinalSummary, Stage4Error> {
    std::fs::create_dir_all(out_dir)?;

    let row = classify
        .table
        .row(&selection.region)
        .ok_or_else(|| DatasetError::NotFound(selection.region.clone()))?;
    let selected = build_metrics_panel(&ctx.thresholds, row)?;

    let alerts = aggregate(&classify.table);
    for entry in &alerts.entries {
        info!(
            parameter = entry.parameter.as_str(),
            regions = entry.regions.len(),
            "alerts"
        );
    }

    let map_parameter = match map_parameter {
        Some(p) => p.to_string(),
        None => ctx
            .dataset
            .parameters()
            .first()
            .cloned()
            .ok_or_else(|| ClassifyError::UnknownParameter("<none>".to_string()))?,
    };
    let layer = build_map_layer(&ctx.thresholds, &classify.table, &map_parameter)?;
    write_map(out_dir, &layer)?;

    let summary = FinalSummary {
        tool: ToolSummary {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        profile: ProfileSummary {
            id: ctx.profile.id.clone(),
            title: ctx.profile.title.clone(),
            n_regions: ctx.dataset.len(),
            parameters: ctx.dataset.parameters().to_vec(),
            updated_fields: selection.applied,
        },
        selected,
        levels: classify.summary.clone(),
        map_parameter,
        no_danger: alerts.is_empty(),
        alerts,
    };

    write_summary(out_dir, &summary)?;
    let text = render_report(&summary, &ctx.profile);
    std::fs::write(out_dir.join("report.txt"), text)?;

    Ok(summary)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
