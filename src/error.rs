//! Error types for the quantum chess engines.
//!
//! This crate uses `thiserror` to provide a single enumeration of the
//! errors that may occur while analysing a position. A position with no
//! legal moves is not an error: both selectors return a sentinel result
//! for it instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// The provided FEN string could not be parsed.
    #[error("Invalid FEN: {0}")]
    InvalidFen(#[from] shakmaty::fen::ParseFenError),

    /// A parsed position is invalid from the perspective of `shakmaty`.
    #[error("Invalid Chess Position: {0}")]
    InvalidPosition(#[from] shakmaty::PositionError<shakmaty::Chess>),

    /// A legal move could not be described as an origin/destination pair.
    #[error("Unsupported move from rules engine: {0}")]
    UnsupportedMove(String),

    /// The engine configuration document is malformed.
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A configuration value is outside its accepted range.
    #[error("Invalid configuration value: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
