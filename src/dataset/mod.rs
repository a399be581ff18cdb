pub mod classified;

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::debug;

use crate::dataset::classified::{ClassifiedCell, ClassifiedRegion, ClassifiedTable};
use crate::model::region::Region;
use crate::model::thresholds::{ClassifyError, ThresholdTable};
use crate::profiles::defs::Profile;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DatasetError {
    #[error("region not found: {0}")]
    NotFound(String),
    #[error("dataset has no regions")]
    Empty,
    #[error("unknown parameter: {0}")]
    UnknownParameter(String),
    #[error("non-finite value for {parameter}: {value}")]
    NonFinite { parameter: String, value: f64 },
    #[error("region {region} has no value for {parameter}")]
    MissingValue { region: String, parameter: String },
    #[error("region {region} has {found} values for {expected} parameters")]
    ValueCount {
        region: String,
        expected: usize,
        found: usize,
    },
    #[error("classify error: {0}")]
    Classify(#[from] ClassifyError),
}

/// The fixed set of regions of one session. Names never change; only raw
/// parameter values are mutated through [`RegionDataset::update`].
#[derive(Debug, Clone, PartialEq)]
pub struct RegionDataset {
    parameters: Vec<String>,
    regions: Vec<Region>,
}

impl RegionDataset {
    /// Every region must carry exactly one value per parameter, in
    /// parameter order.
    pub fn new(parameters: Vec<String>, regions: Vec<Region>) -> Result<Self, DatasetError> {
        for region in &regions {
            if region.values.len() < parameters.len() {
                return Err(DatasetError::MissingValue {
                    region: region.name.clone(),
                    parameter: parameters[region.values.len()].clone(),
                });
            }
            if region.values.len() > parameters.len() {
                return Err(DatasetError::ValueCount {
                    region: region.name.clone(),
                    expected: parameters.len(),
                    found: region.values.len(),
                });
            }
        }
        Ok(Self {
            parameters,
            regions,
        })
    }

    /// Fresh copy of the profile's built-in rows, values laid out in
    /// parameter declaration order.
    pub fn from_profile(profile: &Profile) -> Result<Self, DatasetError> {
        let parameters: Vec<String> = profile.parameter_ids().map(str::to_string).collect();
        let mut regions = Vec::with_capacity(profile.regions.len());
        for def in &profile.regions {
            let mut values = Vec::with_capacity(parameters.len());
            for param in &parameters {
                let v = def
                    .values
                    .get(param)
                    .ok_or_else(|| DatasetError::MissingValue {
                        region: def.name.clone(),
                        parameter: param.clone(),
                    })?;
                values.push(*v);
            }
            regions.push(Region {
                name: def.name.clone(),
                latitude: def.latitude,
                longitude: def.longitude,
                values,
                impact: def.impact.clone(),
            });
        }
        Self::new(parameters, regions)
    }

    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().map(|r| r.name.as_str())
    }

    pub fn parameter_index(&self, parameter: &str) -> Result<usize, DatasetError> {
        self.parameters
            .iter()
            .position(|p| p == parameter)
            .ok_or_else(|| DatasetError::UnknownParameter(parameter.to_string()))
    }

    pub fn select(&self, name: &str) -> Result<&Region, DatasetError> {
        self.regions
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| DatasetError::NotFound(name.to_string()))
    }

    /// Overwrites the supplied parameters of one region. Every entry is
    /// checked before anything is written, so a rejected update leaves the
    /// dataset untouched.
    pub fn update(
        &mut self,
        name: &str,
        new_values: &BTreeMap<String, f64>,
    ) -> Result<(), DatasetError> {
        let row = self
            .regions
            .iter()
            .position(|r| r.name == name)
            .ok_or_else(|| DatasetError::NotFound(name.to_string()))?;

        let mut writes = Vec::with_capacity(new_values.len());
        for (param, value) in new_values {
            let idx = self.parameter_index(param)?;
            if !value.is_finite() {
                return Err(DatasetError::NonFinite {
                    parameter: param.clone(),
                    value: *value,
                });
            }
            writes.push((idx, *value));
        }

        let region = &mut self.regions[row];
        for (idx, value) in writes {
            let Some(slot) = region.values.get_mut(idx) else {
                return Err(DatasetError::MissingValue {
                    region: region.name.clone(),
                    parameter: self.parameters[idx].clone(),
                });
            };
            debug!(
                region = name,
                parameter = self.parameters[idx].as_str(),
                old = *slot,
                new = value,
                "value updated"
            );
            *slot = value;
        }
        Ok(())
    }

    /// Classifies every value of every region against `table`. Nothing is
    /// cached; each call reflects the current raw values.
    pub fn classified_view(&self, table: &ThresholdTable) -> Result<ClassifiedTable, DatasetError> {
        let specs = self
            .parameters
            .iter()
            .map(|p| table.parameter(p))
            .collect::<Result<Vec<_>, _>>()?;

        let mut rows = Vec::with_capacity(self.regions.len());
        for region in &self.regions {
            let cells = specs
                .iter()
                .zip(region.values.iter())
                .map(|(spec, value)| {
                    let c = spec.classify(*value);
                    ClassifiedCell {
                        parameter: spec.id.clone(),
                        value: *value,
                        level: c.level,
                        fallback: c.fallback,
                    }
                })
                .collect();
            rows.push(ClassifiedRegion {
                name: region.name.clone(),
                latitude: region.latitude,
                longitude: region.longitude,
                impact: region.impact.clone(),
                cells,
            });
        }

        Ok(ClassifiedTable {
            parameters: self.parameters.clone(),
            rows,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/dataset/mod.rs"]
mod tests;
