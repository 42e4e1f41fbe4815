use crate::error::{Result, SolverError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

fn default_max_group_capacity() -> u32 {
    75
}

fn default_excluded_lecture_spaces() -> HashSet<String> {
    ["Drawing Studio", "Computer"].iter().map(|s| s.to_string()).collect()
}

/// Weights for the four soft-constraint penalty terms (§4.6). Defaults
/// match the reference: gap:1, bad_time:2, building:5, imbalance:2.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CostWeights {
    #[serde(default = "default_gap_weight")]
    pub gap: i64,
    #[serde(default = "default_bad_time_weight")]
    pub bad_time: i64,
    #[serde(default = "default_building_weight")]
    pub building: i64,
    #[serde(default = "default_imbalance_weight")]
    pub imbalance: i64,
}

fn default_gap_weight() -> i64 {
    1
}
fn default_bad_time_weight() -> i64 {
    2
}
fn default_building_weight() -> i64 {
    5
}
fn default_imbalance_weight() -> i64 {
    2
}

impl Default for CostWeights {
    fn default() -> Self {
        CostWeights {
            gap: default_gap_weight(),
            bad_time: default_bad_time_weight(),
            building: default_building_weight(),
            imbalance: default_imbalance_weight(),
        }
    }
}

/// Parameters for the simulated-annealing optimizer (§6).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AnnealingParams {
    #[serde(default = "default_iterations")]
    pub iterations: u64,
    #[serde(default = "default_initial_temperature")]
    pub initial_temperature: f64,
    #[serde(default = "default_cooling_rate")]
    pub cooling_rate: f64,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_iterations() -> u64 {
    10_000
}
fn default_initial_temperature() -> f64 {
    20.0
}
fn default_cooling_rate() -> f64 {
    0.9995
}

impl Default for AnnealingParams {
    fn default() -> Self {
        AnnealingParams {
            iterations: default_iterations(),
            initial_temperature: default_initial_temperature(),
            cooling_rate: default_cooling_rate(),
            seed: None,
        }
    }
}

impl AnnealingParams {
    /// Validated at optimizer construction (§7 InvalidConfiguration).
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(SolverError::InvalidConfiguration {
                message: "iterations must be positive".into(),
            });
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(SolverError::InvalidConfiguration {
                message: format!("cooling_rate {} must lie in (0, 1)", self.cooling_rate),
            });
        }
        if self.initial_temperature <= 0.0 {
            return Err(SolverError::InvalidConfiguration {
                message: "initial_temperature must be positive".into(),
            });
        }
        Ok(())
    }
}

/// The full configuration surface (§6): group-packing cap, excluded
/// lecture-room space types, soft weights, and annealing parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    #[serde(default = "default_max_group_capacity")]
    pub max_group_capacity: u32,
    #[serde(default = "default_excluded_lecture_spaces")]
    pub excluded_lecture_spaces: HashSet<String>,
    #[serde(default)]
    pub weights: CostWeights,
    #[serde(default)]
    pub annealing: AnnealingParams,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            max_group_capacity: default_max_group_capacity(),
            excluded_lecture_spaces: default_excluded_lecture_spaces(),
            weights: CostWeights::default(),
            annealing: AnnealingParams::default(),
        }
    }
}

impl SolverConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_group_capacity == 0 {
            return Err(SolverError::InvalidConfiguration {
                message: "max_group_capacity must be positive".into(),
            });
        }
        if self.weights.gap < 0
            || self.weights.bad_time < 0
            || self.weights.building < 0
            || self.weights.imbalance < 0
        {
            return Err(SolverError::InvalidConfiguration {
                message: "cost weights must be non-negative".into(),
            });
        }
        self.annealing.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_values() {
        let cfg = SolverConfig::default();
        assert_eq!(cfg.max_group_capacity, 75);
        assert_eq!(cfg.weights.gap, 1);
        assert_eq!(cfg.annealing.iterations, 10_000);
        assert!(cfg.excluded_lecture_spaces.contains("Drawing Studio"));
    }

    #[test]
    fn rejects_cooling_rate_outside_unit_interval() {
        let mut params = AnnealingParams::default();
        params.cooling_rate = 1.2;
        assert!(params.validate().is_err());
        params.cooling_rate = 0.0;
        assert!(params.validate().is_err());
    }
}
