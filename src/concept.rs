//! Symbolic labels attached to the sampled move, and the prose built from them.

use std::fmt;

use rand::Rng;
use serde::Serialize;
use shakmaty::Role;

use crate::moves::{CandidateMove, is_center};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Concept {
    Superposition,
    Entanglement,
    ProbabilisticCollapse,
    QuantumTunneling,
    Coherence,
}

/// Ordered classification rules; the first matching rule wins.
const RULES: [(fn(&CandidateMove) -> bool, Concept); 4] = [
    (|c: &CandidateMove| c.is_capture(), Concept::ProbabilisticCollapse),
    (|c: &CandidateMove| c.gives_check, Concept::QuantumTunneling),
    (|c: &CandidateMove| is_center(c.to), Concept::Coherence),
    (
        |c: &CandidateMove| matches!(c.role, Role::Queen | Role::Rook),
        Concept::Entanglement,
    ),
];

// Placeholders: {notation}, {count}, {percent}.
const SUPERPOSITION: [&str; 4] = [
    "Quantum modeling explored {count} possible moves in parallel before collapsing to {notation} - unlike normal AI, which only outputs the single best move.",
    "Quantum superposition evaluated {count} move possibilities simultaneously, then collapsed to {notation} with {percent}% probability.",
    "While classical AI picks one move, quantum AI maintains {count} possibilities in superposition until measurement reveals {notation}.",
    "Quantum algorithm processed {count} parallel move states before wavefunction collapse selected {notation}.",
];

const ENTANGLEMENT: [&str; 4] = [
    "Quantum entanglement coordinated multiple piece threats before selecting {notation} - creating interconnected tactical possibilities.",
    "Entangled piece movements led quantum AI to {notation}, where multiple pieces work in quantum correlation.",
    "Quantum entanglement analysis revealed {notation} as the move that maximizes piece coordination across the board.",
    "Through quantum entanglement, {notation} emerged as the move that creates the strongest piece correlations.",
];

const PROBABILISTIC_COLLAPSE: [&str; 4] = [
    "Quantum probabilistic collapse chose {notation} from {count} possibilities - a calculated risk that classical AI might avoid.",
    "Quantum measurement collapsed {count} superposed states into {notation}, demonstrating probabilistic decision-making.",
    "Unlike deterministic classical AI, quantum collapse selected {notation} with {percent}% probability from {count} options.",
    "Quantum wavefunction collapse revealed {notation} as the chosen move from {count} parallel possibilities.",
];

const QUANTUM_TUNNELING: [&str; 4] = [
    "Quantum tunneling analysis identified {notation} as a direct tactical breakthrough - bypassing classical defensive barriers.",
    "Through quantum tunneling, {notation} emerged as the move that penetrates opponent's position most effectively.",
    "Quantum tunneling algorithm found {notation} to be the optimal path through the opponent's defensive quantum barriers.",
    "Quantum tunneling effect selected {notation} as the move that creates the most direct tactical advantage.",
];

const COHERENCE: [&str; 4] = [
    "Quantum coherence analysis maintained positional stability while selecting {notation} from {count} possibilities.",
    "Quantum coherence preserved strategic harmony in choosing {notation} over {count} alternative moves.",
    "Through quantum coherence, {notation} emerged as the move that maintains the strongest positional quantum state.",
    "Quantum coherence algorithm selected {notation} as the move that maximizes positional quantum stability.",
];

impl Concept {
    pub const ALL: [Concept; 5] = [
        Concept::Superposition,
        Concept::Entanglement,
        Concept::ProbabilisticCollapse,
        Concept::QuantumTunneling,
        Concept::Coherence,
    ];

    /// Labels a move from its features alone.
    pub fn classify(candidate: &CandidateMove) -> Self {
        RULES
            .iter()
            .find(|(rule, _)| rule(candidate))
            .map_or(Concept::Superposition, |&(_, concept)| concept)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Concept::Superposition => "superposition",
            Concept::Entanglement => "entanglement",
            Concept::ProbabilisticCollapse => "probabilistic_collapse",
            Concept::QuantumTunneling => "quantum_tunneling",
            Concept::Coherence => "coherence",
        }
    }

    /// One-sentence rationale shown next to a recommendation.
    pub fn summary(self) -> &'static str {
        match self {
            Concept::Superposition => {
                "Quantum model suggests this move as it maintains multiple tactical pathways simultaneously, keeping options open like quantum superposition."
            }
            Concept::Entanglement => {
                "This move coordinates piece threats in tandem, creating interconnected tactical possibilities across the board."
            }
            Concept::ProbabilisticCollapse => {
                "A calculated risk that can yield sudden advantage, representing the collapse of quantum probabilities into decisive action."
            }
            Concept::QuantumTunneling => {
                "This move bypasses traditional defensive structures, finding unexpected tactical opportunities."
            }
            Concept::Coherence => {
                "Maintains strategic harmony across all pieces, ensuring coordinated quantum-like coherence in the position."
            }
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Concept::Superposition => {
                "Multiple possibilities exist simultaneously until a move is made"
            }
            Concept::Entanglement => "Pieces coordinate their influence across the board",
            Concept::ProbabilisticCollapse => "Risk-taking that can lead to sudden advantage",
            Concept::QuantumTunneling => "Finding unexpected paths through defensive structures",
            Concept::Coherence => "Maintaining strategic harmony across all pieces",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Concept::Superposition => "⚛️",
            Concept::Entanglement => "🔗",
            Concept::ProbabilisticCollapse => "💥",
            Concept::QuantumTunneling => "🚀",
            Concept::Coherence => "✨",
        }
    }

    fn templates(self) -> &'static [&'static str; 4] {
        match self {
            Concept::Superposition => &SUPERPOSITION,
            Concept::Entanglement => &ENTANGLEMENT,
            Concept::ProbabilisticCollapse => &PROBABILISTIC_COLLAPSE,
            Concept::QuantumTunneling => &QUANTUM_TUNNELING,
            Concept::Coherence => &COHERENCE,
        }
    }

    /// Renders a randomly chosen template for this concept.
    pub fn explain<R: Rng + ?Sized>(
        self,
        notation: &str,
        move_count: usize,
        probability: f64,
        rng: &mut R,
    ) -> String {
        let templates = self.templates();
        let template = templates[rng.gen_range(0..templates.len())];
        render(template, notation, move_count, probability)
    }
}

fn render(template: &str, notation: &str, move_count: usize, probability: f64) -> String {
    let percent = (probability * 100.0).round() as i64;
    template
        .replace("{notation}", notation)
        .replace("{count}", &move_count.to_string())
        .replace("{percent}", &percent.to_string())
}

impl fmt::Display for Concept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::candidate_moves;
    use rand::{SeedableRng, rngs::StdRng};
    use shakmaty::{CastlingMode, Chess, fen::Fen};

    fn candidates(fen: &str) -> Vec<CandidateMove> {
        let pos: Chess = fen
            .parse::<Fen>()
            .unwrap()
            .into_position(CastlingMode::Standard)
            .unwrap();
        candidate_moves(&pos).unwrap()
    }

    fn by_coordinates(list: &[CandidateMove], mv: &str) -> CandidateMove {
        list.iter().find(|c| c.coordinates() == mv).unwrap().clone()
    }

    #[test]
    fn capture_overrides_every_other_rule() {
        // Qxd5+ captures on a centre square with a heavy piece and gives check.
        let list = candidates("3k4/8/8/3p4/8/8/8/3QK3 w - - 0 1");
        let capture = by_coordinates(&list, "d1d5");
        assert!(capture.gives_check);
        assert_eq!(Concept::classify(&capture), Concept::ProbabilisticCollapse);
    }

    #[test]
    fn rule_precedence() {
        let list = candidates("6k1/8/8/8/8/8/8/3QK3 w - - 0 1");
        // Check without capture.
        assert_eq!(
            Concept::classify(&by_coordinates(&list, "d1g4")),
            Concept::QuantumTunneling
        );
        // Queen to a centre square.
        assert_eq!(
            Concept::classify(&by_coordinates(&list, "d1d4")),
            Concept::Coherence
        );
        assert_eq!(
            Concept::classify(&by_coordinates(&list, "d1d2")),
            Concept::Entanglement
        );
        assert_eq!(
            Concept::classify(&by_coordinates(&list, "e1f2")),
            Concept::Superposition
        );
    }

    #[test]
    fn serializes_as_snake_case() {
        for concept in Concept::ALL {
            let json = serde_json::to_string(&concept).unwrap();
            assert_eq!(json, format!("\"{}\"", concept.as_str()));
        }
    }

    #[test]
    fn explanation_interpolates_move_facts() {
        let mut rng = StdRng::seed_from_u64(7);
        for concept in Concept::ALL {
            let text = concept.explain("E2E4", 20, 0.126, &mut rng);
            assert!(!text.contains('{'));
            assert!(text.contains("E2E4"));
        }
        assert_eq!(
            render(PROBABILISTIC_COLLAPSE[2], "D1D5", 7, 0.126),
            "Unlike deterministic classical AI, quantum collapse selected D1D5 with 13% probability from 7 options."
        );
    }

    #[test]
    fn explanation_is_reproducible_with_seed() {
        let a = Concept::Coherence.explain("E2E4", 20, 0.1, &mut StdRng::seed_from_u64(3));
        let b = Concept::Coherence.explain("E2E4", 20, 0.1, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn metadata_is_present_for_every_concept() {
        for concept in Concept::ALL {
            assert!(!concept.summary().is_empty());
            assert!(!concept.description().is_empty());
            assert!(!concept.icon().is_empty());
        }
    }
}
