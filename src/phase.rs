use std::fmt;

use serde::Serialize;
use shakmaty::{Chess, Position};

use crate::config::PhaseThresholds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    Opening,
    Middlegame,
    Endgame,
}

impl GamePhase {
    /// Classifies `position` by the number of pieces (kings and pawns
    /// included) left on the board.
    pub fn of(position: &Chess, thresholds: &PhaseThresholds) -> Self {
        Self::from_piece_count(position.board().occupied().count() as u32, thresholds)
    }

    pub fn from_piece_count(pieces: u32, thresholds: &PhaseThresholds) -> Self {
        if pieces > thresholds.opening_above {
            GamePhase::Opening
        } else if pieces > thresholds.middlegame_above {
            GamePhase::Middlegame
        } else {
            GamePhase::Endgame
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GamePhase::Opening => "opening",
            GamePhase::Middlegame => "middlegame",
            GamePhase::Endgame => "endgame",
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shakmaty::{CastlingMode, fen::Fen};

    #[test]
    fn start_position_is_opening() {
        let phase = GamePhase::of(&Chess::default(), &PhaseThresholds::default());
        assert_eq!(phase, GamePhase::Opening);
    }

    #[test]
    fn boundaries_are_exclusive() {
        let t = PhaseThresholds::default();
        assert_eq!(GamePhase::from_piece_count(21, &t), GamePhase::Opening);
        assert_eq!(GamePhase::from_piece_count(20, &t), GamePhase::Middlegame);
        assert_eq!(GamePhase::from_piece_count(11, &t), GamePhase::Middlegame);
        assert_eq!(GamePhase::from_piece_count(10, &t), GamePhase::Endgame);
    }

    #[test]
    fn king_and_pawn_ending_is_endgame() {
        let pos: Chess = "8/5k2/8/3p4/3P4/8/5K2/8 w - - 0 1"
            .parse::<Fen>()
            .unwrap()
            .into_position(CastlingMode::Standard)
            .unwrap();
        assert_eq!(
            GamePhase::of(&pos, &PhaseThresholds::default()),
            GamePhase::Endgame
        );
    }
}
