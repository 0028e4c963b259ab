use serde::Serialize;

use crate::concept::Concept;

/// Deterministic heuristic recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassicalResult {
    /// Origin and destination squares, e.g. `e2e4`. Empty when there is no legal move.
    #[serde(rename = "move")]
    pub mv: String,
    pub reason: String,
    pub evaluation: f64,
}

/// Sampled recommendation drawn from the weighted move distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuantumResult {
    /// Origin and destination squares, e.g. `g1f3`. Empty when there is no legal move.
    #[serde(rename = "move")]
    pub mv: String,
    pub concept: Concept,
    /// Normalized probability of the chosen move, 0.0 when there is no legal move
    pub probability: f64,
    pub explanation: String,
}

/// Both recommendations for one position, as handed to a presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoveAnalysis {
    pub classical: ClassicalResult,
    pub quantum: QuantumResult,
    /// Milliseconds since the Unix epoch at which the analysis completed
    pub timestamp: u64,
}

pub(crate) const NO_LEGAL_MOVES: &str = "No legal moves available";

impl ClassicalResult {
    pub(crate) fn no_legal_moves() -> Self {
        Self {
            mv: String::new(),
            reason: NO_LEGAL_MOVES.to_string(),
            evaluation: 0.0,
        }
    }

    pub fn has_move(&self) -> bool {
        !self.mv.is_empty()
    }
}

impl QuantumResult {
    pub(crate) fn no_legal_moves() -> Self {
        Self {
            mv: String::new(),
            concept: Concept::Superposition,
            probability: 0.0,
            explanation: "No legal moves available in quantum superposition.".to_string(),
        }
    }

    pub fn has_move(&self) -> bool {
        !self.mv.is_empty()
    }
}
