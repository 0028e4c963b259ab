use quantum_chess::{EngineConfig, QuantumChess};
use rand::{SeedableRng, rngs::StdRng};
use tracing_subscriber::EnvFilter;

const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Usage: analyze [FEN] [SEED] [CONFIG.json]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let fen = args.next().unwrap_or_else(|| START_FEN.to_string());
    let mut rng = match args.next() {
        Some(seed) => StdRng::seed_from_u64(seed.parse()?),
        None => StdRng::from_entropy(),
    };
    let config = match args.next() {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };

    let engine = QuantumChess::with_config(config)?;
    let analysis = engine.analyze(&fen, &mut rng)?;

    println!("{}", serde_json::to_string_pretty(&analysis)?);
    println!(
        "{} {}: {}",
        analysis.quantum.concept.icon(),
        analysis.quantum.concept,
        analysis.quantum.concept.description()
    );

    Ok(())
}
