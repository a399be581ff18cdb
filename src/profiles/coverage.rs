use serde::Serialize;

use crate::model::levels::AlertLevel;
use crate::model::thresholds::{ParameterSpec, ThresholdTable};

/// Irregularities between two consecutive bands of one parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CoverageFinding {
    /// Values strictly between `from` and `to` match no band.
    Gap {
        lower: AlertLevel,
        upper: AlertLevel,
        from: f64,
        to: f64,
    },
    /// `value` is in both bands; the lower one wins.
    SharedBoundary {
        lower: AlertLevel,
        upper: AlertLevel,
        value: f64,
    },
    /// `[from, to]` is in both bands; the lower one wins.
    Overlap {
        lower: AlertLevel,
        upper: AlertLevel,
        from: f64,
        to: f64,
    },
}

impl CoverageFinding {
    pub fn kind(&self) -> &'static str {
        match self {
            CoverageFinding::Gap { .. } => "gap",
            CoverageFinding::SharedBoundary { .. } => "shared_boundary",
            CoverageFinding::Overlap { .. } => "overlap",
        }
    }

    pub fn levels(&self) -> (AlertLevel, AlertLevel) {
        match self {
            CoverageFinding::Gap { lower, upper, .. }
            | CoverageFinding::SharedBoundary { lower, upper, .. }
            | CoverageFinding::Overlap { lower, upper, .. } => (*lower, *upper),
        }
    }

    pub fn range(&self) -> (f64, f64) {
        match self {
            CoverageFinding::Gap { from, to, .. } | CoverageFinding::Overlap { from, to, .. } => {
                (*from, *to)
            }
            CoverageFinding::SharedBoundary { value, .. } => (*value, *value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterCoverage {
    pub parameter: String,
    /// Outside `[domain_min, domain_max]` every value falls back.
    pub domain_min: f64,
    pub domain_max: f64,
    pub findings: Vec<CoverageFinding>,
}

impl ParameterCoverage {
    pub fn gaps(&self) -> impl Iterator<Item = &CoverageFinding> {
        self.findings
            .iter()
            .filter(|f| matches!(f, CoverageFinding::Gap { .. }))
    }

    /// True when every value inside the domain matches some band.
    pub fn is_contiguous(&self) -> bool {
        self.gaps().next().is_none()
    }
}

pub fn analyze(spec: &ParameterSpec) -> ParameterCoverage {
    let domain_min = spec
        .bands
        .iter()
        .map(|b| b.min)
        .fold(f64::INFINITY, f64::min);
    let domain_max = spec
        .bands
        .iter()
        .map(|b| b.max)
        .fold(f64::NEG_INFINITY, f64::max);

    let mut findings = Vec::new();
    for pair in spec.bands.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if b.min > a.max {
            findings.push(CoverageFinding::Gap {
                lower: a.level,
                upper: b.level,
                from: a.max,
                to: b.min,
            });
        } else if b.min == a.max {
            findings.push(CoverageFinding::SharedBoundary {
                lower: a.level,
                upper: b.level,
                value: a.max,
            });
        } else {
            findings.push(CoverageFinding::Overlap {
                lower: a.level,
                upper: b.level,
                from: b.min,
                to: a.max.min(b.max),
            });
        }
    }

    ParameterCoverage {
        parameter: spec.id.clone(),
        domain_min,
        domain_max,
        findings,
    }
}

pub fn analyze_table(table: &ThresholdTable) -> Vec<ParameterCoverage> {
    table.parameters().iter().map(analyze).collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/profiles/coverage.rs"]
mod tests;
