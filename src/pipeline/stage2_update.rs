use std::collections::BTreeMap;

use thiserror::Error;
use tracing::info;

use crate::dataset::DatasetError;
use crate::pipeline::stage1_load::SessionCtx;

#[derive(Debug, Error)]
pub enum Stage2Error {
    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),
}

/// The user's interaction: which region is shown, and the edits to commit
/// to it in one step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateRequest {
    pub region: Option<String>,
    pub values: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub region: String,
    pub applied: usize,
}

pub fn run_stage2(ctx: &mut SessionCtx, request: &UpdateRequest) -> Result<Selection, Stage2Error> {
    let region = match &request.region {
        Some(name) => ctx.dataset.select(name)?.name.clone(),
        None => ctx
            .dataset
            .names()
            .next()
            .map(str::to_string)
            .ok_or(DatasetError::Empty)?,
    };

    if !request.values.is_empty() {
        ctx.dataset.update(&region, &request.values)?;
        info!(
            region = region.as_str(),
            fields = request.values.len(),
            "values updated"
        );
    }

    Ok(Selection {
        region,
        applied: request.values.len(),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_update.rs"]
mod tests;
