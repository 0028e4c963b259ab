//! Heuristic scoring of the position reached by one candidate move.
//!
//! The score is an additive combination of material, placement, tactical,
//! phase, mobility and king-safety terms. Material and placement are
//! signed from the mover's point of view. No lookahead is performed.

use shakmaty::{Chess, Color, Position, Role};

use crate::{
    moves::{CandidateMove, center_distance, chebyshev, is_center, rank_progress},
    phase::GamePhase,
    tables::{centipawn_value, piece_value, placement},
};

const MATERIAL_SCALE: f64 = 10.0;
const PLACEMENT_SCALE: f64 = 100.0;
const CHECK_BONUS: f64 = 50.0;
const CHECKMATE_BONUS: f64 = 10000.0;
const MOBILITY_PER_MOVE: f64 = 2.0;
const CASTLING_BONUS: f64 = 50.0;
const KING_CENTER_PENALTY: f64 = 5.0;

/// Facts about the pre-move position shared by every candidate.
#[derive(Debug, Clone, Copy)]
pub struct EvalContext {
    pub phase: GamePhase,
    pub mover: Color,
    /// Number of legal moves before any candidate is applied.
    pub legal_move_count: usize,
}

/// Per-term score of one candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Evaluation {
    pub material: f64,
    pub placement: f64,
    pub tactics: f64,
    pub phase: f64,
    pub mobility: f64,
    pub king_safety: f64,
}

impl Evaluation {
    pub fn total(&self) -> f64 {
        self.material
            + self.placement
            + self.tactics
            + self.phase
            + self.mobility
            + self.king_safety
    }
}

/// Scores `successor`, the position after `candidate` was played.
pub fn evaluate(successor: &Chess, candidate: &CandidateMove, ctx: &EvalContext) -> Evaluation {
    Evaluation {
        material: material(successor, ctx.mover),
        placement: placement_score(successor, ctx.mover),
        tactics: tactics(candidate),
        phase: phase_bonus(successor, candidate, ctx),
        mobility: MOBILITY_PER_MOVE * ctx.legal_move_count as f64,
        king_safety: king_safety(successor, candidate, ctx.mover),
    }
}

fn sign(color: Color, mover: Color) -> i32 {
    if color == mover { 1 } else { -1 }
}

fn material(position: &Chess, mover: Color) -> f64 {
    let balance: i32 = position
        .board()
        .iter()
        .map(|(_, piece)| piece_value(piece.role) as i32 * sign(piece.color, mover))
        .sum();
    balance as f64 * MATERIAL_SCALE
}

fn placement_score(position: &Chess, mover: Color) -> f64 {
    let total: i32 = position
        .board()
        .iter()
        .map(|(sq, piece)| placement(piece.color, piece.role, sq) * sign(piece.color, mover))
        .sum();
    total as f64 / PLACEMENT_SCALE
}

fn tactics(candidate: &CandidateMove) -> f64 {
    let mut score = 0.0;
    if candidate.gives_check {
        score += CHECK_BONUS;
    }
    if let Some(captured) = candidate.capture {
        score += centipawn_value(captured) as f64 / 100.0;
    }
    if candidate.gives_checkmate {
        score += CHECKMATE_BONUS;
    }
    score
}

fn phase_bonus(successor: &Chess, candidate: &CandidateMove, ctx: &EvalContext) -> f64 {
    match ctx.phase {
        GamePhase::Opening => opening_bonus(candidate),
        GamePhase::Middlegame => middlegame_bonus(successor, candidate, ctx.mover),
        GamePhase::Endgame => endgame_bonus(candidate, ctx.mover),
    }
}

fn opening_bonus(candidate: &CandidateMove) -> f64 {
    let mut score = 0.0;
    if is_center(candidate.to) {
        score += 30.0;
    }
    if matches!(candidate.role, Role::Knight | Role::Bishop) {
        score += 20.0;
    }
    if candidate.role == Role::Pawn && matches!(candidate.to.rank() as u32, 3 | 4) {
        score += 15.0;
    }
    score
}

fn middlegame_bonus(successor: &Chess, candidate: &CandidateMove, mover: Color) -> f64 {
    let mut score = 0.0;
    if matches!(candidate.role, Role::Queen | Role::Rook) {
        score += 25.0;
    }
    if let Some(king) = successor.board().king_of(mover.other()) {
        if chebyshev(candidate.to, king) <= 2 {
            score += 20.0;
        }
    }
    score
}

fn endgame_bonus(candidate: &CandidateMove, mover: Color) -> f64 {
    match candidate.role {
        Role::King => 40.0,
        Role::Pawn => rank_progress(mover, candidate.to) as f64 * 10.0,
        _ => 0.0,
    }
}

fn king_safety(successor: &Chess, candidate: &CandidateMove, mover: Color) -> f64 {
    let mut score = 0.0;
    if candidate.is_castle {
        score += CASTLING_BONUS;
    }
    if let Some(king) = successor.board().king_of(mover) {
        score -= KING_CENTER_PENALTY * center_distance(king);
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::PhaseThresholds,
        moves::{apply_move, candidate_moves},
    };
    use shakmaty::{CastlingMode, fen::Fen};

    fn position(fen: &str) -> Chess {
        fen.parse::<Fen>()
            .unwrap()
            .into_position(CastlingMode::Standard)
            .unwrap()
    }

    fn score_all(pos: &Chess) -> Vec<(String, Evaluation)> {
        let candidates = candidate_moves(pos).unwrap();
        let ctx = EvalContext {
            phase: GamePhase::of(pos, &PhaseThresholds::default()),
            mover: pos.turn(),
            legal_move_count: candidates.len(),
        };
        candidates
            .iter()
            .map(|c| (c.coordinates(), evaluate(&apply_move(pos, c.mv), c, &ctx)))
            .collect()
    }

    fn find<'a>(scores: &'a [(String, Evaluation)], mv: &str) -> &'a Evaluation {
        &scores.iter().find(|(m, _)| m == mv).unwrap().1
    }

    #[test]
    fn center_pawn_push_beats_rook_pawn_push_in_opening() {
        let scores = score_all(&Chess::default());
        let e4 = find(&scores, "e2e4");
        let a3 = find(&scores, "a2a3");
        assert_eq!(e4.phase, 45.0);
        assert_eq!(a3.phase, 0.0);
        assert!(e4.total() > a3.total());
    }

    #[test]
    fn mobility_is_constant_across_candidates() {
        let scores = score_all(&Chess::default());
        assert!(scores.iter().all(|(_, e)| e.mobility == 40.0));
    }

    #[test]
    fn material_is_from_movers_side() {
        // Black to move can win White's queen.
        let pos = position("4k3/8/8/3q4/3Q4/8/8/4K3 b - - 0 1");
        let scores = score_all(&pos);
        let capture = find(&scores, "d5d4");
        assert_eq!(capture.material, 90.0);
        assert_eq!(capture.tactics, 9.0);
    }

    #[test]
    fn checkmate_dominates() {
        let pos = position("r1bqkbnr/pppp1ppp/2n5/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4");
        let scores = score_all(&pos);
        let mate = find(&scores, "h5f7");
        assert_eq!(mate.tactics, 50.0 + 1.0 + 10000.0);
        let best = scores
            .iter()
            .max_by(|a, b| a.1.total().total_cmp(&b.1.total()))
            .unwrap();
        assert_eq!(best.0, "h5f7");
    }

    #[test]
    fn castling_rewarded() {
        let pos = position("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1");
        let scores = score_all(&pos);
        let castle = find(&scores, "e1g1");
        let step = find(&scores, "e1f1");
        assert_eq!(castle.king_safety, 50.0 - 5.0 * 3.5);
        assert!(castle.king_safety > step.king_safety);
    }

    #[test]
    fn endgame_rewards_pawn_progress_by_color() {
        let white = score_all(&position("8/5k2/8/8/3P4/8/5K2/8 w - - 0 1"));
        assert_eq!(find(&white, "d4d5").phase, 40.0);
        assert_eq!(find(&white, "f2e3").phase, 40.0);

        let black = score_all(&position("8/5k2/8/3p4/8/8/5K2/8 b - - 0 1"));
        assert_eq!(find(&black, "d5d4").phase, 40.0);
    }

    #[test]
    fn middlegame_rewards_heavy_pieces_near_enemy_king() {
        // 11 pieces on the board.
        let pos = position("r4k2/5ppp/8/8/8/8/5PPP/R2Q2K1 w - - 0 1");
        assert_eq!(
            GamePhase::of(&pos, &PhaseThresholds::default()),
            GamePhase::Middlegame
        );
        let scores = score_all(&pos);
        assert_eq!(find(&scores, "d1d8").phase, 25.0 + 20.0);
        assert_eq!(find(&scores, "d1d2").phase, 25.0);
        assert_eq!(find(&scores, "g1f1").phase, 0.0);
    }
}
