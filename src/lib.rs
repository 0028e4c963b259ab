//! Two independent move recommendations for a chess position.
//!
//! The classical engine scores every legal move with hand-tuned
//! heuristics (material, piece-square tables, tactics, game phase,
//! mobility and king safety) and deterministically picks the best one.
//! The quantum-inspired engine turns the same legal moves into a
//! probability distribution, samples one move, labels it with a
//! [`Concept`] and renders a short explanation.
//!
//! Legal-move generation is delegated to `shakmaty`. There is no search
//! and no actual quantum computation. All randomness comes from a caller
//! supplied [`rand::Rng`], so seeded generators give reproducible output.
//!
//! The principal type is [`QuantumChess`], which parses FEN strings and
//! exposes both selectors as well as [`QuantumChess::analyze`], running
//! them in parallel.
//!
//! The library re‑exports `shakmaty` to make position construction easy.

mod classical;
mod concept;
mod config;
mod engine;
mod error;
mod eval;
mod moves;
mod phase;
mod quantum;
mod tables;
mod types;

/// Main engine facade.
pub use engine::{QuantumChess, parse_position};

/// Error type produced by library operations.
pub use error::EngineError;

/// Engine settings.
pub use config::{EngineConfig, Perturbation, PhaseThresholds};

/// Output data structures returned by the selectors.
pub use types::{ClassicalResult, MoveAnalysis, QuantumResult};

pub use concept::Concept;
pub use phase::GamePhase;

/// Lower-level building blocks of the two engines.
pub use classical::{ScoredMove, best_move, score_moves, select_classical};
pub use eval::{EvalContext, Evaluation, evaluate};
pub use moves::{CandidateMove, apply_move, candidate_moves};
pub use quantum::{WeightedMove, base_weight, compute_weights, sample, select_quantum};

/// Re-export of `shakmaty` for convenience when building positions.
pub use shakmaty;
