use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, RngCore, SeedableRng, rngs::StdRng};
use shakmaty::{CastlingMode, Chess, fen::Fen};
use tracing::info;

use crate::{
    classical::select_classical,
    config::EngineConfig,
    error::EngineError,
    quantum::select_quantum,
    types::{ClassicalResult, MoveAnalysis, QuantumResult},
};

/// Entry point pairing the classical and quantum selectors.
///
/// The engine holds configuration only; every call works on its own
/// position snapshot, so one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct QuantumChess {
    config: EngineConfig,
}

/// Parses and validates a FEN string into a playable position.
pub fn parse_position(fen: &str) -> Result<Chess, EngineError> {
    let fen: Fen = fen.trim().parse()?;
    Ok(fen.into_position(CastlingMode::Standard)?)
}

impl QuantumChess {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an engine from `config`, rejecting out-of-range values.
    pub fn with_config(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn classical<R: Rng + ?Sized>(
        &self,
        fen: &str,
        rng: &mut R,
    ) -> Result<ClassicalResult, EngineError> {
        let position = parse_position(fen)?;
        self.classical_position(&position, rng)
    }

    pub fn quantum<R: Rng + ?Sized>(
        &self,
        fen: &str,
        rng: &mut R,
    ) -> Result<QuantumResult, EngineError> {
        let position = parse_position(fen)?;
        self.quantum_position(&position, rng)
    }

    pub fn classical_position<R: Rng + ?Sized>(
        &self,
        position: &Chess,
        rng: &mut R,
    ) -> Result<ClassicalResult, EngineError> {
        select_classical(position, &self.config.phase, rng)
    }

    pub fn quantum_position<R: Rng + ?Sized>(
        &self,
        position: &Chess,
        rng: &mut R,
    ) -> Result<QuantumResult, EngineError> {
        select_quantum(position, &self.config.perturbation, rng)
    }

    /// Runs both selectors on `fen` in parallel.
    ///
    /// Each selector gets its own generator seeded from `rng`, so a seeded
    /// caller gets the same analysis back regardless of scheduling.
    pub fn analyze<R: Rng + ?Sized>(
        &self,
        fen: &str,
        rng: &mut R,
    ) -> Result<MoveAnalysis, EngineError> {
        let position = parse_position(fen)?;
        let mut classical_rng = StdRng::seed_from_u64(rng.next_u64());
        let mut quantum_rng = StdRng::seed_from_u64(rng.next_u64());

        let (classical, quantum) = rayon::join(
            || self.classical_position(&position, &mut classical_rng),
            || self.quantum_position(&position, &mut quantum_rng),
        );
        let (classical, quantum) = (classical?, quantum?);

        info!(
            classical = %classical.mv,
            quantum = %quantum.mv,
            concept = %quantum.concept,
            "analysis complete"
        );

        Ok(MoveAnalysis {
            classical,
            quantum,
            timestamp: unix_millis(),
        })
    }
}

fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as u64)
}
