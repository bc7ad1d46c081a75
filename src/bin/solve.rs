use std::path::PathBuf;

use clap::Parser;
use starcargo::{
    default_deck, load_contracts_from_json, rng_for_trial, Cards, KindsDb, Requirements, Solver,
    State,
};

#[derive(Debug, Parser)]
#[command(name = "solve", about = "Exact contract completion probability for one position")]
struct Args {
    /// Deck composition as comma-separated letter=count pairs, e.g. "R=3,T=2,S=2,D=2,M=1"
    /// (defaults to the standard deck)
    #[arg(long)]
    deck: Option<String>,

    /// Explicit hand as a string of kind letters, e.g. "RRTDS"; taken out of the deck
    #[arg(long)]
    hand: Option<String>,

    /// Number of cards to draw for the hand when --hand is not given
    #[arg(long, default_value_t = 5)]
    hand_size: usize,

    /// Action budget at the start of the contract
    #[arg(long, default_value_t = 1)]
    actions: u32,

    /// Requirements as comma-separated letter=count pairs over RTSDC, e.g. "R=2,S=1"
    #[arg(long)]
    requirements: Option<String>,

    /// Take the requirements from a named contract instead
    #[arg(long)]
    contract: Option<String>,

    /// Contract catalog path (used with --contract)
    #[arg(long, default_value = "data/contracts.json")]
    contracts: PathBuf,

    /// Seed for the random hand draw
    #[arg(long, default_value_t = 0x00C0_FFEE_u64)]
    seed: u64,

    /// Colorize the card and requirement output
    #[arg(long)]
    color: bool,
}

fn parse_deck(spec: &str, kinds: &KindsDb) -> Result<Cards, String> {
    let mut deck = Cards::new();
    for tok in spec.split(',') {
        let tok = tok.trim();
        if tok.is_empty() {
            continue;
        }
        let parts: Vec<&str> = tok.split('=').collect();
        if parts.len() != 2 {
            return Err(format!("Invalid deck token '{tok}', expected letter=count"));
        }
        let mut letters = parts[0].trim().chars();
        let (Some(letter), None) = (letters.next(), letters.next()) else {
            return Err(format!("Invalid kind letter in '{tok}'"));
        };
        let id = kinds
            .id_by_letter(letter)
            .ok_or_else(|| format!("Unknown card letter '{letter}'"))?;
        let count: u8 = parts[1]
            .trim()
            .parse()
            .map_err(|e| format!("Invalid count in '{tok}': {e}"))?;
        deck.add(id, count);
    }
    if deck.is_empty() {
        return Err("Deck spec contains no cards".to_string());
    }
    Ok(deck)
}

fn parse_requirements(spec: &str) -> Result<Requirements, String> {
    let mut reqs = Requirements::default();
    for tok in spec.split(',') {
        let tok = tok.trim();
        if tok.is_empty() {
            continue;
        }
        let parts: Vec<&str> = tok.split('=').collect();
        if parts.len() != 2 {
            return Err(format!(
                "Invalid requirements token '{tok}', expected letter=count"
            ));
        }
        let count: u8 = parts[1]
            .trim()
            .parse()
            .map_err(|e| format!("Invalid count in '{tok}': {e}"))?;
        match parts[0].trim() {
            "R" | "r" => reqs.reactors = count,
            "T" | "t" => reqs.thrusters = count,
            "S" | "s" => reqs.shields = count,
            "D" | "d" => reqs.damage = count,
            "C" | "c" => reqs.crew = count,
            other => return Err(format!("Unknown requirement axis '{other}'")),
        }
    }
    Ok(reqs)
}

/// Splits an explicit hand out of the deck, failing if the deck lacks a card.
fn take_hand(deck: &Cards, hand_spec: &str, kinds: &KindsDb) -> Result<(Cards, Cards), String> {
    let mut draw_pile = deck.clone();
    let mut hand = Cards::new();
    for letter in hand_spec.trim().chars() {
        let id = kinds
            .id_by_letter(letter)
            .ok_or_else(|| format!("Unknown card letter '{letter}'"))?;
        draw_pile
            .remove_one(id)
            .map_err(|e| format!("Hand card '{letter}' not available in deck: {e}"))?;
        hand.add_one(id);
    }
    Ok((draw_pile, hand))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let kinds = KindsDb::standard();
    let deck = match &args.deck {
        Some(spec) => parse_deck(spec, &kinds).map_err(|e| format!("Deck parse error: {e}"))?,
        None => default_deck(),
    };

    let requirements = match (&args.requirements, &args.contract) {
        (Some(spec), None) => {
            parse_requirements(spec).map_err(|e| format!("Requirements parse error: {e}"))?
        }
        (None, Some(name)) => {
            let db = load_contracts_from_json(&args.contracts)
                .map_err(|e| format!("Contracts load error: {e}"))?;
            db.get(name)
                .ok_or_else(|| format!("Unknown contract '{name}'"))?
                .requirements
        }
        _ => return Err("Exactly one of --requirements or --contract is required".into()),
    };

    let (draw_pile, hand) = match &args.hand {
        Some(spec) => take_hand(&deck, spec, &kinds).map_err(|e| format!("Hand error: {e}"))?,
        None => {
            let mut rng = rng_for_trial(args.seed, 0);
            deck.draw_random(&mut rng, args.hand_size)
        }
    };

    let render = |cards: &Cards| {
        if args.color {
            cards.to_console_string(&kinds)
        } else {
            cards.to_string(&kinds)
        }
    };
    println!("deck: {}", render(&deck));
    println!("hand: {}  |  draw pile: {}", render(&hand), render(&draw_pile));
    println!("requirements: {}", requirements.to_string(args.color));

    let state = State::new(args.actions, hand, draw_pile, requirements, &kinds)
        .map_err(|e| format!("State error: {e}"))?;

    let mut solver = Solver::new();
    let prob = solver.completion_probability(&state, &kinds)?;

    let qualifier = if prob == 0.0 {
        "impossible".to_string()
    } else if (prob - 1.0).abs() < 1e-6 {
        // allow for rounding error
        "guaranteed possible".to_string()
    } else {
        let in_n = 1.0 / prob;
        if (in_n - in_n.round()).abs() < 1e-6 {
            format!("1 in {in_n:.0}")
        } else {
            format!("1 in {in_n:.1}")
        }
    };
    println!(
        "probability of being able to meet requirements: {:.2}% ({qualifier})",
        prob * 100.0
    );
    println!("[solve] explored {} states", solver.explored_count());

    Ok(())
}
