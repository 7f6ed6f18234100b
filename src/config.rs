//! Fare policy configuration
//!
//! The policy is plain serde data so a deployment can keep it in a JSON file.
//! Missing fields fall back to the standard fare table.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use crate::constants::{
    BASE_DISTANCE, BASE_FARE, LONG_TIER_UNIT_DISTANCE, MIDDLE_TIER_LIMIT, MIDDLE_TIER_UNIT_DISTANCE, TIER_UNIT_FARE,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read fare policy {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse fare policy: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid fare policy: {0}")]
    Invalid(String),
}

/// Which line a hop is charged to when several lines offer it at the same
/// distance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurchargeAttribution {
    /// The rider pays the lowest surcharge among the tied lines
    #[default]
    Cheapest,
    /// The rider pays the highest surcharge among the tied lines
    Highest,
}

/// One distance bracket above the base distance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FareTier {
    /// Upper bound of the bracket in kilometres; `None` for the last bracket
    #[serde(default)]
    pub up_to: Option<u32>,
    /// Kilometres per charged unit (partial units round up)
    pub unit_distance: u32,
    pub unit_fare: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FarePolicy {
    pub base_fare: u32,
    pub base_distance: u32,
    pub tiers: Vec<FareTier>,
    pub surcharge_attribution: SurchargeAttribution,
}

impl Default for FarePolicy {
    fn default() -> Self {
        Self {
            base_fare: BASE_FARE,
            base_distance: BASE_DISTANCE,
            tiers: vec![
                FareTier {
                    up_to: Some(MIDDLE_TIER_LIMIT),
                    unit_distance: MIDDLE_TIER_UNIT_DISTANCE,
                    unit_fare: TIER_UNIT_FARE,
                },
                FareTier {
                    up_to: None,
                    unit_distance: LONG_TIER_UNIT_DISTANCE,
                    unit_fare: TIER_UNIT_FARE,
                },
            ],
            surcharge_attribution: SurchargeAttribution::default(),
        }
    }
}

impl FarePolicy {
    /// Parse and validate a policy from JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the policy is invalid
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let policy: Self = serde_json::from_str(json)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Load and validate a policy from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is malformed, or the
    /// policy is invalid
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Check that the tiers can price every distance
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if a tier has a zero unit distance, the
    /// bounds do not ascend past the base distance, or the last tier is bounded
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut lower = self.base_distance;
        for (index, tier) in self.tiers.iter().enumerate() {
            if tier.unit_distance == 0 {
                return Err(ConfigError::Invalid(format!("tier {index} has a zero unit distance")));
            }

            let is_last = index + 1 == self.tiers.len();
            match tier.up_to {
                Some(limit) if limit <= lower => {
                    return Err(ConfigError::Invalid(format!(
                        "tier {index} ends at {limit}, which is not above {lower}"
                    )));
                }
                Some(_) if is_last => {
                    return Err(ConfigError::Invalid("the last tier must not have an upper bound".to_string()));
                }
                None if !is_last => {
                    return Err(ConfigError::Invalid(format!("tier {index} is unbounded but is not the last tier")));
                }
                Some(limit) => lower = limit,
                None => {}
            }
        }
        Ok(())
    }
}
