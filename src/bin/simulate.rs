use std::path::PathBuf;

use clap::Parser;
use starcargo::{
    default_deck, expected_best_offer_credits, load_contracts_from_json, KindsDb, SimConfig,
};

#[derive(Debug, Parser)]
#[command(
    name = "simulate",
    about = "Monte Carlo expected credits when taking the best of several contract offers"
)]
struct Args {
    /// Contract catalog path
    #[arg(long, default_value = "data/contracts.json")]
    contracts: PathBuf,

    /// Keep only contracts with at most this many hazard dice in the pool
    #[arg(long, default_value_t = 2)]
    max_hazard: u8,

    /// Contracts offered per round
    #[arg(long, default_value_t = 8)]
    offers: usize,

    /// Number of simulated rounds
    #[arg(long, default_value_t = 10_000)]
    trials: u64,

    /// Cards drawn for the starting hand
    #[arg(long, default_value_t = 5)]
    hand_size: usize,

    /// Action budget per contract
    #[arg(long, default_value_t = 1)]
    actions: u32,

    /// Simulation seed (deterministic per seed)
    #[arg(long, default_value_t = 0x00C0_FFEE_u64)]
    seed: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let kinds = KindsDb::standard();
    let deck = default_deck();
    println!("[simulate] deck: {}", deck.to_string(&kinds));

    let db = load_contracts_from_json(&args.contracts)
        .map_err(|e| format!("Contracts load error: {e}"))?;
    let pool = db.max_hazard(args.max_hazard);
    println!(
        "[simulate] {} of {} contracts in the offer pool (hazard dice <= {})",
        pool.len(),
        db.len(),
        args.max_hazard
    );
    if pool.is_empty() {
        return Err("Offer pool is empty; raise --max-hazard".into());
    }

    let config = SimConfig {
        trials: args.trials,
        offer_size: args.offers,
        hand_size: args.hand_size,
        actions: args.actions,
        seed: args.seed,
        progress: true,
    };
    let report = expected_best_offer_credits(&deck, &pool, &kinds, &config)?;

    println!(
        "[simulate] expected credits per round: {:.4}",
        report.mean_credits
    );
    println!(
        "[simulate] explored {} states across {} trials",
        report.states_explored, report.trials
    );

    Ok(())
}
