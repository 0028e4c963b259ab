use rand::{Rng, seq::SliceRandom};
use shakmaty::{Chess, Position};
use tracing::{debug, trace};

use crate::{
    config::PhaseThresholds,
    error::EngineError,
    eval::{EvalContext, Evaluation, evaluate},
    moves::{CandidateMove, apply_move, candidate_moves},
    phase::GamePhase,
    types::ClassicalResult,
};

/// A legal move with its heuristic score.
#[derive(Debug, Clone)]
pub struct ScoredMove {
    pub candidate: CandidateMove,
    pub evaluation: Evaluation,
}

impl ScoredMove {
    pub fn score(&self) -> f64 {
        self.evaluation.total()
    }
}

const OPENING_REASONS: [&str; 6] = [
    "Develops piece to active square",
    "Controls center squares",
    "Prepares for kingside/queenside development",
    "Establishes pawn structure advantage",
    "Follows opening principles",
    "Improves piece coordination",
];

const MIDDLEGAME_REASONS: [&str; 6] = [
    "Creates tactical opportunity",
    "Improves piece coordination",
    "Attacks opponent's king position",
    "Gains material advantage",
    "Strengthens position",
    "Creates attacking chances",
];

const ENDGAME_REASONS: [&str; 6] = [
    "Activates king for endgame",
    "Creates passed pawn",
    "Improves pawn structure",
    "Centralizes pieces for attack",
    "Improves king position",
    "Advances pawns toward promotion",
];

fn reasons(phase: GamePhase) -> &'static [&'static str] {
    match phase {
        GamePhase::Opening => &OPENING_REASONS,
        GamePhase::Middlegame => &MIDDLEGAME_REASONS,
        GamePhase::Endgame => &ENDGAME_REASONS,
    }
}

/// Scores every legal move of `position`, in rules-engine order, and
/// returns the context the scores were computed under.
pub fn score_moves(
    position: &Chess,
    thresholds: &PhaseThresholds,
) -> Result<(EvalContext, Vec<ScoredMove>), EngineError> {
    let candidates = candidate_moves(position)?;
    let ctx = EvalContext {
        phase: GamePhase::of(position, thresholds),
        mover: position.turn(),
        legal_move_count: candidates.len(),
    };

    let scored = candidates
        .into_iter()
        .map(|candidate| {
            let successor = apply_move(position, candidate.mv);
            let evaluation = evaluate(&successor, &candidate, &ctx);
            trace!(mv = %candidate.san, score = evaluation.total(), "scored move");
            ScoredMove {
                candidate,
                evaluation,
            }
        })
        .collect();

    Ok((ctx, scored))
}

/// First move with the strictly greatest score.
pub fn best_move(scored: &[ScoredMove]) -> Option<&ScoredMove> {
    let mut best: Option<&ScoredMove> = None;
    for candidate in scored {
        if best.is_none_or(|b| candidate.score() > b.score()) {
            best = Some(candidate);
        }
    }
    best
}

/// Picks the highest-scoring legal move.
///
/// `rng` only chooses the wording of the reason; the move and its
/// evaluation depend on the position alone.
pub fn select_classical<R: Rng + ?Sized>(
    position: &Chess,
    thresholds: &PhaseThresholds,
    rng: &mut R,
) -> Result<ClassicalResult, EngineError> {
    let (ctx, scored) = score_moves(position, thresholds)?;
    let Some(best) = best_move(&scored) else {
        debug!("classical: no legal moves");
        return Ok(ClassicalResult::no_legal_moves());
    };

    let phase = ctx.phase;
    let score = best.score();
    debug!(
        moves = scored.len(),
        %phase,
        mv = %best.candidate.san,
        score,
        "classical move selected"
    );

    Ok(ClassicalResult {
        mv: best.candidate.coordinates(),
        reason: reason(&best.candidate, score, phase, rng),
        evaluation: score,
    })
}

fn reason<R: Rng + ?Sized>(
    candidate: &CandidateMove,
    score: f64,
    phase: GamePhase,
    rng: &mut R,
) -> String {
    let phrase = reasons(phase)
        .choose(rng)
        .map_or(String::new(), |p| p.to_lowercase());
    let notation = candidate.notation();

    if score > 2.0 {
        format!("Classical AI prefers {notation} for {phrase}.")
    } else if score < -2.0 {
        format!("Classical AI suggests {notation} to minimize disadvantage.")
    } else {
        format!("Classical AI chooses {notation} for {phrase}.")
    }
}
