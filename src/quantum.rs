//! Weighted random move selection.
//!
//! Each legal move receives a positive weight from its features times a
//! bounded random factor, the weights are normalized into a probability
//! distribution, and one move is drawn by roulette-wheel sampling.

use rand::Rng;
use shakmaty::Chess;
use tracing::{debug, trace};

use crate::{
    concept::Concept,
    config::Perturbation,
    error::EngineError,
    moves::{CandidateMove, candidate_moves, is_center},
    tables::piece_value,
    types::QuantumResult,
};

const CENTER_FACTOR: f64 = 1.2;
const PIECE_VALUE_FACTOR: f64 = 0.1;
const CAPTURE_FACTOR: f64 = 1.5;
const CHECK_FACTOR: f64 = 1.3;

#[derive(Debug, Clone)]
pub struct WeightedMove {
    pub candidate: CandidateMove,
    pub weight: f64,
    pub probability: f64,
}

/// Weight of `candidate` before the random factor is applied.
pub fn base_weight(candidate: &CandidateMove) -> f64 {
    let mut weight = 1.0;
    if is_center(candidate.to) {
        weight *= CENTER_FACTOR;
    }
    weight *= 1.0 + PIECE_VALUE_FACTOR * piece_value(candidate.role) as f64;
    if candidate.is_capture() {
        weight *= CAPTURE_FACTOR;
    }
    if candidate.gives_check {
        weight *= CHECK_FACTOR;
    }
    weight
}

fn perturbation_factor<R: Rng + ?Sized>(perturbation: &Perturbation, rng: &mut R) -> f64 {
    match *perturbation {
        Perturbation::Uniform { low, high } if high > low => rng.gen_range(low..high),
        Perturbation::Uniform { low, .. } => low,
        Perturbation::Fixed(factor) => factor,
    }
}

/// Weights and normalizes `candidates`, preserving their order.
///
/// Draws one value from `rng` per candidate when the perturbation is
/// uniform and none when it is fixed. `perturbation` is expected to have
/// passed [`Perturbation::validate`]; a non-positive factor does not yield
/// a probability distribution.
pub fn compute_weights<R: Rng + ?Sized>(
    candidates: &[CandidateMove],
    perturbation: &Perturbation,
    rng: &mut R,
) -> Vec<WeightedMove> {
    let mut weighted: Vec<WeightedMove> = candidates
        .iter()
        .map(|candidate| WeightedMove {
            candidate: candidate.clone(),
            weight: base_weight(candidate) * perturbation_factor(perturbation, rng),
            probability: 0.0,
        })
        .collect();

    let total: f64 = weighted.iter().map(|w| w.weight).sum();
    for w in &mut weighted {
        w.probability = w.weight / total;
        trace!(
            mv = %w.candidate.san,
            weight = w.weight,
            probability = w.probability,
            "weighted move"
        );
    }

    weighted
}

/// Roulette-wheel draw: the first move whose cumulative probability
/// reaches a uniform `r` in `[0, 1)`, or the last move if rounding leaves
/// the total short of `r`.
pub fn sample<'a, R: Rng + ?Sized>(
    weighted: &'a [WeightedMove],
    rng: &mut R,
) -> Option<&'a WeightedMove> {
    let r: f64 = rng.gen_range(0.0..1.0);
    let mut cumulative = 0.0;
    for w in weighted {
        cumulative += w.probability;
        if cumulative >= r {
            return Some(w);
        }
    }
    weighted.last()
}

/// Draws a move from the weighted distribution over the legal moves of
/// `position`, labels it and explains it.
pub fn select_quantum<R: Rng + ?Sized>(
    position: &Chess,
    perturbation: &Perturbation,
    rng: &mut R,
) -> Result<QuantumResult, EngineError> {
    let candidates = candidate_moves(position)?;
    let weighted = compute_weights(&candidates, perturbation, rng);

    let Some(chosen) = sample(&weighted, rng) else {
        debug!("quantum: no legal moves");
        return Ok(QuantumResult::no_legal_moves());
    };

    let concept = Concept::classify(&chosen.candidate);
    debug!(
        moves = weighted.len(),
        mv = %chosen.candidate.san,
        probability = chosen.probability,
        %concept,
        "quantum move sampled"
    );

    Ok(QuantumResult {
        mv: chosen.candidate.coordinates(),
        concept,
        probability: chosen.probability,
        explanation: concept.explain(
            &chosen.candidate.notation(),
            weighted.len(),
            chosen.probability,
            rng,
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use shakmaty::{CastlingMode, fen::Fen};

    fn position(fen: &str) -> Chess {
        fen.parse::<Fen>()
            .unwrap()
            .into_position(CastlingMode::Standard)
            .unwrap()
    }

    fn find<'a>(weighted: &'a [WeightedMove], mv: &str) -> &'a WeightedMove {
        weighted
            .iter()
            .find(|w| w.candidate.coordinates() == mv)
            .unwrap()
    }

    #[test]
    fn probabilities_sum_to_one() {
        let positions = [
            Chess::default(),
            position("r1bqkbnr/pppp1ppp/2n5/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4"),
            position("8/5k2/8/3p4/3P4/8/5K2/8 w - - 0 1"),
        ];
        let mut rng = StdRng::seed_from_u64(42);
        for pos in &positions {
            let candidates = candidate_moves(pos).unwrap();
            let weighted = compute_weights(&candidates, &Perturbation::default(), &mut rng);
            let sum: f64 = weighted.iter().map(|w| w.probability).sum();
            assert!((sum - 1.0).abs() < 1e-9);
            assert!(
                weighted
                    .iter()
                    .all(|w| w.probability > 0.0 && w.probability <= 1.0)
            );
        }
    }

    #[test]
    fn base_weight_factors() {
        let candidates = candidate_moves(&Chess::default()).unwrap();
        let e4 = candidates.iter().find(|c| c.coordinates() == "e2e4").unwrap();
        let a3 = candidates.iter().find(|c| c.coordinates() == "a2a3").unwrap();
        let nf3 = candidates.iter().find(|c| c.coordinates() == "g1f3").unwrap();
        assert!((base_weight(e4) - 1.2 * 1.1).abs() < 1e-12);
        assert!((base_weight(a3) - 1.1).abs() < 1e-12);
        assert!((base_weight(nf3) - 1.3).abs() < 1e-12);
    }

    #[test]
    fn capture_multiplies_weight_by_one_and_a_half() {
        // Rxa6 and Ra2 differ only by the capture: same rook, no centre square, no check.
        let pos = position("4k3/8/q7/8/8/8/8/R3K3 w - - 0 1");
        let candidates = candidate_moves(&pos).unwrap();
        let weighted = compute_weights(
            &candidates,
            &Perturbation::Fixed(1.0),
            &mut StdRng::seed_from_u64(0),
        );
        let capture = find(&weighted, "a1a6");
        let quiet = find(&weighted, "a1a2");
        assert!((capture.weight / quiet.weight - 1.5).abs() < 1e-12);
        assert_eq!(
            Concept::classify(&capture.candidate),
            Concept::ProbabilisticCollapse
        );
    }

    #[test]
    fn fixed_perturbation_is_reproducible() {
        let candidates = candidate_moves(&Chess::default()).unwrap();
        let fixed = Perturbation::Fixed(1.0);
        let a = compute_weights(&candidates, &fixed, &mut StdRng::seed_from_u64(1));
        let b = compute_weights(&candidates, &fixed, &mut StdRng::seed_from_u64(2));
        let pa: Vec<f64> = a.iter().map(|w| w.probability).collect();
        let pb: Vec<f64> = b.iter().map(|w| w.probability).collect();
        assert_eq!(pa, pb);
    }

    #[test]
    fn uniform_perturbation_stays_in_bounds() {
        let candidates = candidate_moves(&Chess::default()).unwrap();
        let weighted = compute_weights(
            &candidates,
            &Perturbation::default(),
            &mut StdRng::seed_from_u64(9),
        );
        for w in &weighted {
            let factor = w.weight / base_weight(&w.candidate);
            assert!(factor > 0.8 - 1e-12 && factor < 1.2 + 1e-12);
        }
    }

    #[test]
    fn seeded_selection_is_reproducible() {
        let pos = Chess::default();
        let perturbation = Perturbation::default();
        let a = select_quantum(&pos, &perturbation, &mut StdRng::seed_from_u64(2024)).unwrap();
        let b = select_quantum(&pos, &perturbation, &mut StdRng::seed_from_u64(2024)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn reported_probability_matches_weight_model() {
        let pos = Chess::default();
        let candidates = candidate_moves(&pos).unwrap();
        let perturbation = Perturbation::default();
        for seed in 0..20 {
            let weighted =
                compute_weights(&candidates, &perturbation, &mut StdRng::seed_from_u64(seed));
            let result =
                select_quantum(&pos, &perturbation, &mut StdRng::seed_from_u64(seed)).unwrap();
            let expected = find(&weighted, &result.mv);
            assert_eq!(result.probability, expected.probability);
            assert_eq!(result.concept, Concept::classify(&expected.candidate));
        }
    }

    #[test]
    fn sample_walks_cumulative_mass() {
        let candidates = candidate_moves(&Chess::default()).unwrap();
        let weighted = compute_weights(
            &candidates,
            &Perturbation::Fixed(1.0),
            &mut StdRng::seed_from_u64(0),
        );
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            let chosen = sample(&weighted, &mut rng).unwrap();
            assert!(weighted.iter().any(|w| w.candidate == chosen.candidate));
        }
        assert!(sample(&[], &mut rng).is_none());
    }

    #[test]
    fn single_legal_move_has_probability_one() {
        let pos = position("k7/1Q6/8/8/8/8/8/1K2R3 b - - 0 1");
        let result =
            select_quantum(&pos, &Perturbation::default(), &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(result.mv, "a8b7");
        assert_eq!(result.probability, 1.0);
        assert_eq!(result.concept, Concept::ProbabilisticCollapse);
        assert!(result.explanation.contains("A8B7"));
    }

    #[test]
    fn no_legal_moves_returns_sentinel() {
        let pos = position("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1");
        let result =
            select_quantum(&pos, &Perturbation::default(), &mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(result, QuantumResult::no_legal_moves());
        assert_eq!(result.probability, 0.0);
    }
}
