use crate::errors::Error;
use crate::kinds::KindsDb;
use crate::state::State;
use crate::types::Prob;

pub mod memo;

pub use memo::MemoCache;

/// Exact solver: the maximum completion probability over all play orders,
/// computed by memoized recursion over canonical states.
///
/// A solver owns its memoization map and is not thread-safe; concurrent
/// solves require independent instances. The map only grows within a
/// solver's lifetime.
#[derive(Debug, Default)]
pub struct Solver {
    explored: MemoCache,
    explore_count: u64,
}

impl Solver {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            explored: MemoCache::with_capacity(cap),
            explore_count: 0,
        }
    }

    /// Probability of clearing every requirement before the action budget
    /// runs out, assuming optimal play.
    ///
    /// Base cases: empty requirements solve with certainty; zero actions
    /// with requirements left cannot be solved. Otherwise the result is the
    /// maximum over the transition operators of every distinct kind in hand
    /// (0 for an empty hand), memoized by state.
    pub fn completion_probability(
        &mut self,
        state: &State,
        kinds: &KindsDb,
    ) -> Result<Prob, Error> {
        self.explore_count += 1;

        if state.requirements.is_empty() {
            return Ok(1.0);
        }
        if state.actions == 0 {
            // no card can be played
            return Ok(0.0);
        }

        if let Some(prob) = self.explored.get(state) {
            return Ok(prob);
        }

        let mut best: Prob = 0.0;
        for (kind, _) in state.hand.iter() {
            let play = kinds.play_fn(kind)?;
            let prob = play(kind, state, kinds, self)?;
            best = best.max(prob);
        }

        self.explored.insert(state.clone(), best);
        Ok(best)
    }

    /// Total `completion_probability` calls, cache hits and base cases
    /// included.
    #[inline]
    pub fn explored_count(&self) -> u64 {
        self.explore_count
    }

    #[inline]
    pub fn cache_size(&self) -> usize {
        self.explored.len()
    }
}
