use indicatif::{ProgressBar, ProgressStyle};
use rand::seq::SliceRandom;
use rayon::prelude::*;

use crate::cards::Cards;
use crate::contracts::Contract;
use crate::errors::Error;
use crate::kinds::KindsDb;
use crate::rng::rng_for_trial;
use crate::solver::Solver;
use crate::state::State;

/// Tunables for an expected-credits simulation run.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    pub trials: u64,
    /// Contracts offered per round; the player takes the most lucrative one.
    pub offer_size: usize,
    pub hand_size: usize,
    pub actions: u32,
    pub seed: u64,
    pub progress: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            trials: 10_000,
            offer_size: 8,
            hand_size: 5,
            actions: 1,
            seed: 0x00C0_FFEE,
            progress: false,
        }
    }
}

/// Outcome of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimReport {
    pub trials: u64,
    /// Mean over trials of the best `probability × credits` in the offer.
    pub mean_credits: f64,
    /// Solver calls summed over all trials. Workers share a memo across the
    /// trials they happen to run, so this varies with work splitting.
    pub states_explored: u64,
}

/// Monte Carlo estimate of the credits earned per round when the player may
/// pick the best of `offer_size` contracts sampled from `pool`.
///
/// Each trial samples an offer, draws a fresh random hand from `deck` for
/// every offered contract, and scores the offer by the best exact
/// `completion probability × credits`. Trials are parallelized with one
/// solver per worker; each trial derives its own RNG from (seed, trial), so
/// `mean_credits` is deterministic for a fixed config regardless of
/// scheduling.
pub fn expected_best_offer_credits(
    deck: &Cards,
    pool: &[&Contract],
    kinds: &KindsDb,
    config: &SimConfig,
) -> Result<SimReport, Error> {
    let pb = if config.progress {
        ProgressBar::new(config.trials)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] trials {bar:40.cyan/blue} {pos}/{len}")
            .unwrap()
            .progress_chars("=>-"),
    );

    let results: Vec<(f64, u64)> = (0..config.trials)
        .into_par_iter()
        .map_init(Solver::new, |solver, trial| {
            let mut rng = rng_for_trial(config.seed, trial);
            let before = solver.explored_count();

            let mut best = 0.0f64;
            for contract in pool.choose_multiple(&mut rng, config.offer_size) {
                let (draw_pile, hand) = deck.draw_random(&mut rng, config.hand_size);
                let state = State {
                    actions: config.actions,
                    hand,
                    draw_pile,
                    requirements: contract.requirements,
                };
                let prob = solver.completion_probability(&state, kinds)?;
                best = best.max(prob * f64::from(contract.rewards.credits));
            }

            pb.inc(1);
            Ok((best, solver.explored_count() - before))
        })
        .collect::<Result<Vec<_>, Error>>()?;

    pb.finish_and_clear();

    let mean_credits = results.iter().map(|&(credits, _)| credits).sum::<f64>()
        / config.trials.max(1) as f64;
    let states_explored = results.iter().map(|&(_, explored)| explored).sum();

    Ok(SimReport {
        trials: config.trials,
        mean_credits,
        states_explored,
    })
}
