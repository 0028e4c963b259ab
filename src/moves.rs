use shakmaty::{
    CastlingMode, Chess, Color, Move, Position, Role, Square,
    san::{San, SanPlus, Suffix},
    uci::UciMove,
};

use crate::error::EngineError;

/// The four central squares rewarded by both engines.
pub const CENTER_SQUARES: [Square; 4] = [Square::D4, Square::D5, Square::E4, Square::E5];

/// A legal move together with the metadata both selectors read.
///
/// Squares follow UCI standard notation, so castling moves report the
/// king's destination (`e1g1`) rather than the rook square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateMove {
    pub mv: Move,
    pub from: Square,
    pub to: Square,
    pub role: Role,
    pub capture: Option<Role>,
    pub promotion: Option<Role>,
    pub is_castle: bool,
    /// The move leaves the opponent in check (including mate).
    pub gives_check: bool,
    pub gives_checkmate: bool,
    /// Standard algebraic notation with check suffix, e.g. `Qxf7#`.
    pub san: String,
}

impl CandidateMove {
    /// Lowercase origin/destination pair, e.g. `e2e4`.
    pub fn coordinates(&self) -> String {
        format!("{}{}", self.from, self.to)
    }

    /// Uppercase origin/destination pair used in prose, e.g. `E2E4`.
    pub fn notation(&self) -> String {
        self.coordinates().to_uppercase()
    }

    pub fn is_capture(&self) -> bool {
        self.capture.is_some()
    }
}

/// Returns the position reached after `mv`, leaving `position` untouched.
///
/// `mv` must be legal in `position`.
pub fn apply_move(position: &Chess, mv: Move) -> Chess {
    let mut next = position.clone();
    next.play_unchecked(mv);
    next
}

/// Enumerates the legal moves of `position` in rules-engine order.
pub fn candidate_moves(position: &Chess) -> Result<Vec<CandidateMove>, EngineError> {
    let legal_moves = position.legal_moves();
    let mut candidates = Vec::with_capacity(legal_moves.len());

    for m in &legal_moves {
        candidates.push(describe(position, *m)?);
    }

    Ok(candidates)
}

fn describe(position: &Chess, mv: Move) -> Result<CandidateMove, EngineError> {
    let (from, to) = match mv.to_uci(CastlingMode::Standard) {
        UciMove::Normal { from, to, .. } => (from, to),
        other => return Err(EngineError::UnsupportedMove(other.to_string())),
    };

    let successor = apply_move(position, mv);
    let san = SanPlus {
        san: San::from_move(position, mv),
        suffix: Suffix::from_position(&successor),
    };

    Ok(CandidateMove {
        mv,
        from,
        to,
        role: mv.role(),
        capture: mv.capture(),
        promotion: mv.promotion(),
        is_castle: mv.is_castle(),
        gives_check: successor.is_check(),
        gives_checkmate: successor.is_checkmate(),
        san: san.to_string(),
    })
}

pub fn is_center(square: Square) -> bool {
    CENTER_SQUARES.contains(&square)
}

/// King-move distance between two squares.
pub fn chebyshev(a: Square, b: Square) -> u32 {
    let df = (a.file() as i32 - b.file() as i32).unsigned_abs();
    let dr = (a.rank() as i32 - b.rank() as i32).unsigned_abs();
    df.max(dr)
}

/// Chebyshev distance from the geometric centre of the board, 0.5 to 3.5.
pub fn center_distance(square: Square) -> f64 {
    let df = (square.file() as i32 as f64 - 3.5).abs();
    let dr = (square.rank() as i32 as f64 - 3.5).abs();
    df.max(dr)
}

/// Number of ranks a piece of `color` standing on `square` has advanced
/// from its own back rank.
pub fn rank_progress(color: Color, square: Square) -> u32 {
    let rank = square.rank() as u32;
    match color {
        Color::White => rank,
        Color::Black => 7 - rank,
    }
}
