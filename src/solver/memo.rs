use std::hash::BuildHasherDefault;

use hashbrown::HashMap;

use crate::state::State;
use crate::types::Prob;

type FastHasher = BuildHasherDefault<ahash::AHasher>;

/// Memoized completion probabilities keyed by structural state equality.
/// Values are final once inserted; entries are never evicted.
#[derive(Debug, Default)]
pub struct MemoCache {
    map: HashMap<State, Prob, FastHasher>,
}

impl MemoCache {
    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            map: HashMap::with_capacity_and_hasher(cap, FastHasher::default()),
        }
    }

    #[inline]
    pub fn get(&self, state: &State) -> Option<Prob> {
        self.map.get(state).copied()
    }

    #[inline]
    pub fn insert(&mut self, state: State, prob: Prob) {
        self.map.insert(state, prob);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.map.clear();
    }
}
