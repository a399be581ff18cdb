use thiserror::Error;
use tracing::{debug, info};

use crate::dataset::{DatasetError, RegionDataset};
use crate::model::thresholds::ThresholdTable;
use crate::profiles::coverage::analyze_table;
use crate::profiles::defs::Profile;
use crate::profiles::loader::{ProfileError, ProfileSource};

#[derive(Debug, Error)]
pub enum Stage1Error {
    #[error("profile error: {0}")]
    Profile(#[from] ProfileError),
    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),
}

/// Everything one session works on. The dataset is owned here and handed
/// to later stages explicitly.
#[derive(Debug, Clone)]
pub struct SessionCtx {
    pub profile: Profile,
    pub thresholds: ThresholdTable,
    pub dataset: RegionDataset,
}

pub fn run_stage1(source: &ProfileSource) -> Result<SessionCtx, Stage1Error> {
    let profile = source.load()?;
    let thresholds = profile.thresholds();
    let dataset = RegionDataset::from_profile(&profile)?;

    for cov in analyze_table(&thresholds) {
        for finding in &cov.findings {
            let (from, to) = finding.range();
            debug!(
                parameter = cov.parameter.as_str(),
                kind = finding.kind(),
                from,
                to,
                "threshold coverage"
            );
        }
    }

    info!(
        profile = profile.id.as_str(),
        parameters = dataset.parameters().len(),
        regions = dataset.len(),
        "profile loaded"
    );

    Ok(SessionCtx {
        profile,
        thresholds,
        dataset,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_load.rs"]
mod tests;
