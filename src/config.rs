//! Tunable engine settings.
//!
//! Every field has a default, so an empty JSON object `{}` is a valid
//! configuration document.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub phase: PhaseThresholds,
    pub perturbation: Perturbation,
}

/// Piece-count boundaries between game phases.
///
/// A board with more than `opening_above` pieces is in the opening, more
/// than `middlegame_above` in the middlegame, otherwise in the endgame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseThresholds {
    pub opening_above: u32,
    pub middlegame_above: u32,
}

impl Default for PhaseThresholds {
    fn default() -> Self {
        Self {
            opening_above: 20,
            middlegame_above: 10,
        }
    }
}

/// Multiplicative noise applied to every quantum move weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Perturbation {
    /// Factor drawn uniformly from `[low, high)`.
    Uniform { low: f64, high: f64 },
    /// Constant factor; makes the weight vector deterministic.
    Fixed(f64),
}

impl Default for Perturbation {
    fn default() -> Self {
        Perturbation::Uniform {
            low: 0.8,
            high: 1.2,
        }
    }
}

impl Perturbation {
    /// Checks that every factor this perturbation can produce is finite
    /// and strictly positive.
    pub fn validate(&self) -> Result<(), EngineError> {
        match *self {
            Perturbation::Uniform { low, high } => {
                if !(low.is_finite() && high.is_finite()) {
                    return Err(EngineError::InvalidConfig(format!(
                        "uniform perturbation bounds must be finite, got [{low}, {high})"
                    )));
                }
                if low <= 0.0 || low > high {
                    return Err(EngineError::InvalidConfig(format!(
                        "uniform perturbation needs 0 < low <= high, got [{low}, {high})"
                    )));
                }
            }
            Perturbation::Fixed(factor) => {
                if !factor.is_finite() || factor <= 0.0 {
                    return Err(EngineError::InvalidConfig(format!(
                        "fixed perturbation must be finite and positive, got {factor}"
                    )));
                }
            }
        }
        Ok(())
    }
}

impl PhaseThresholds {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.middlegame_above > self.opening_above {
            return Err(EngineError::InvalidConfig(format!(
                "middlegame_above ({}) exceeds opening_above ({})",
                self.middlegame_above, self.opening_above
            )));
        }
        Ok(())
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        self.phase.validate()?;
        self.perturbation.validate()
    }

    /// Parses and validates a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
