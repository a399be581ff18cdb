use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::dataset::DatasetError;
use crate::dataset::classified::ClassifiedTable;
use crate::pipeline::stage1_load::SessionCtx;

#[derive(Debug, Error)]
pub enum Stage3Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),
}

#[derive(Debug, Clone)]
pub struct ClassifyContext {
    pub table: ClassifiedTable,
    pub summary: LevelSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterLevelCounts {
    pub parameter: String,
    pub counts: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelSummary {
    pub levels: Vec<ParameterLevelCounts>,
    pub fallbacks: usize,
}

pub fn run_stage3_classify(
    ctx: &SessionCtx,
    out_dir: &Path,
) -> Result<ClassifyContext, Stage3Error> {
    let table = ctx.dataset.classified_view(&ctx.thresholds)?;

    write_classified(&out_dir.join("classified.tsv"), &table)?;

    let summary = summarize(&table);
    if summary.fallbacks > 0 {
        warn!(
            fallbacks = summary.fallbacks,
            "some values matched no threshold band"
        );
    }

    Ok(ClassifyContext { table, summary })
}

fn write_classified(path: &Path, table: &ClassifiedTable) -> Result<(), Stage3Error> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(path)?;

    let mut header = vec![
        "region".to_string(),
        "latitude".to_string(),
        "longitude".to_string(),
    ];
    for param in &table.parameters {
        header.push(param.clone());
        header.push(format!("{param}_level"));
    }
    header.push("fallbacks".to_string());
    header.push("impact".to_string());
    writer.write_record(&header)?;

    for row in &table.rows {
        let mut record = vec![
            row.name.clone(),
            row.latitude.to_string(),
            row.longitude.to_string(),
        ];
        for cell in &row.cells {
            record.push(cell.value.to_string());
            record.push(cell.level.as_str().to_string());
        }
        let fallbacks: Vec<&str> = row
            .cells
            .iter()
            .filter(|c| c.fallback)
            .map(|c| c.parameter.as_str())
            .collect();
        record.push(if fallbacks.is_empty() {
            ".".to_string()
        } else {
            fallbacks.join(",")
        });
        record.push(row.impact.clone());
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

fn summarize(table: &ClassifiedTable) -> LevelSummary {
    let levels = table
        .parameters
        .iter()
        .map(|p| ParameterLevelCounts {
            parameter: p.clone(),
            counts: table
                .level_counts(p)
                .into_iter()
                .map(|(level, n)| (level.as_str().to_string(), n))
                .collect(),
        })
        .collect();

    LevelSummary {
        levels,
        fallbacks: table.fallback_count(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_classify.rs"]
mod tests;
