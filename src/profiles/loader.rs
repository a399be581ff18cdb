use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::levels::AlertLevel;
use crate::profiles::defs::Profile;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unknown built-in profile: {0}")]
    UnknownBuiltin(String),
    #[error("profile {0} declares no parameters")]
    NoParameters(String),
    #[error("duplicate parameter: {0}")]
    DuplicateParameter(String),
    #[error("bands for {parameter} must be Vert, Jaune, Orange, Rouge in that order, found {found}")]
    BandOrder { parameter: String, found: String },
    #[error("invalid band {level} for {parameter}: [{min}, {max}]")]
    InvalidBand {
        parameter: String,
        level: AlertLevel,
        min: f64,
        max: f64,
    },
    #[error("legend lists level {0} more than once")]
    DuplicateLegend(AlertLevel),
    #[error("advice order names unknown parameter {0}")]
    UnknownAdviceParameter(String),
    #[error("profile {0} declares no regions")]
    NoRegions(String),
    #[error("duplicate region: {0}")]
    DuplicateRegion(String),
    #[error("region {region} has no value for {parameter}")]
    MissingValue { region: String, parameter: String },
    #[error("region {region} has a value for unknown parameter {parameter}")]
    UnknownValue { region: String, parameter: String },
    #[error("region {region} has a non-finite value for {parameter}: {value}")]
    NonFiniteValue {
        region: String,
        parameter: String,
        value: f64,
    },
}

const BUILTIN_PROFILES: &[(&str, &str)] = &[
    ("meteo", include_str!("../../assets/profiles/meteo.toml")),
    ("pluvio", include_str!("../../assets/profiles/pluvio.toml")),
];

pub const DEFAULT_PROFILE: &str = "meteo";

/// Where a session's profile comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSource {
    Builtin(String),
    File(PathBuf),
}

impl ProfileSource {
    pub fn load(&self) -> Result<Profile, ProfileError> {
        match self {
            ProfileSource::Builtin(id) => load_builtin(id),
            ProfileSource::File(path) => load_profile_from_path(path),
        }
    }
}

pub fn builtin_ids() -> impl Iterator<Item = &'static str> {
    BUILTIN_PROFILES.iter().map(|(id, _)| *id)
}

pub fn load_builtin(id: &str) -> Result<Profile, ProfileError> {
    let (_, text) = BUILTIN_PROFILES
        .iter()
        .find(|(builtin, _)| *builtin == id)
        .ok_or_else(|| ProfileError::UnknownBuiltin(id.to_string()))?;
    parse_profile(text)
}

pub fn load_all_builtin() -> Result<Vec<Profile>, ProfileError> {
    builtin_ids().map(load_builtin).collect()
}

pub fn load_profile_from_path(path: &Path) -> Result<Profile, ProfileError> {
    let text = fs::read_to_string(path)?;
    parse_profile(&text)
}

pub fn parse_profile(text: &str) -> Result<Profile, ProfileError> {
    let profile: Profile = toml::from_str(text)?;
    validate_profile(&profile)?;
    Ok(profile)
}

/// Structural checks only. Gaps between bands are legal and are reported
/// by `coverage::analyze` instead.
pub fn validate_profile(profile: &Profile) -> Result<(), ProfileError> {
    if profile.parameters.is_empty() {
        return Err(ProfileError::NoParameters(profile.id.clone()));
    }

    let mut seen = HashSet::new();
    for param in &profile.parameters {
        if !seen.insert(param.id.as_str()) {
            return Err(ProfileError::DuplicateParameter(param.id.clone()));
        }

        let levels: Vec<AlertLevel> = param.bands.iter().map(|b| b.level).collect();
        if levels.as_slice() != AlertLevel::ordered() {
            let found = levels
                .iter()
                .map(|l| l.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(ProfileError::BandOrder {
                parameter: param.id.clone(),
                found,
            });
        }

        for band in &param.bands {
            if !band.min.is_finite() || !band.max.is_finite() || band.min > band.max {
                return Err(ProfileError::InvalidBand {
                    parameter: param.id.clone(),
                    level: band.level,
                    min: band.min,
                    max: band.max,
                });
            }
        }
    }

    let mut legend = HashSet::new();
    for entry in &profile.legend {
        if !legend.insert(entry.level) {
            return Err(ProfileError::DuplicateLegend(entry.level));
        }
    }
    if let Some(id) = profile
        .advice_order
        .iter()
        .find(|id| !seen.contains(id.as_str()))
    {
        return Err(ProfileError::UnknownAdviceParameter(id.clone()));
    }

    if profile.regions.is_empty() {
        return Err(ProfileError::NoRegions(profile.id.clone()));
    }

    let mut names = HashSet::new();
    for region in &profile.regions {
        if !names.insert(region.name.as_str()) {
            return Err(ProfileError::DuplicateRegion(region.name.clone()));
        }
        for param in &profile.parameters {
            match region.values.get(&param.id) {
                None => {
                    return Err(ProfileError::MissingValue {
                        region: region.name.clone(),
                        parameter: param.id.clone(),
                    });
                }
                Some(v) if !v.is_finite() => {
                    return Err(ProfileError::NonFiniteValue {
                        region: region.name.clone(),
                        parameter: param.id.clone(),
                        value: *v,
                    });
                }
                Some(_) => {}
            }
        }
        if let Some(extra) = region.values.keys().find(|k| !seen.contains(k.as_str())) {
            return Err(ProfileError::UnknownValue {
                region: region.name.clone(),
                parameter: extra.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/profiles/loader.rs"]
mod tests;
