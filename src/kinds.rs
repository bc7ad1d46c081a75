use std::collections::HashMap;

use crate::cards::Cards;
use crate::engine::play;
use crate::errors::Error;
use crate::solver::Solver;
use crate::state::State;
use crate::types::{KindId, Prob};

/// Immutable descriptor for one distinguishable card kind. Kinds are
/// process-wide constants; play behavior lives in the registry, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardKind {
    pub id: KindId,
    pub letter: char,
    /// ANSI SGR code for console rendering, e.g. "96".
    pub color: &'static str,
    /// Rendering order only; no gameplay meaning.
    pub sort_order: u16,
}

pub const REACTOR: CardKind = CardKind {
    id: KindId(0),
    letter: 'R',
    color: "96",
    sort_order: 0,
};

pub const THRUSTER: CardKind = CardKind {
    id: KindId(1),
    letter: 'T',
    color: "93",
    sort_order: 1,
};

pub const SHIELD: CardKind = CardKind {
    id: KindId(2),
    letter: 'S',
    color: "92",
    sort_order: 2,
};

pub const DAMAGE: CardKind = CardKind {
    id: KindId(3),
    letter: 'D',
    color: "33",
    sort_order: 3,
};

pub const MISS: CardKind = CardKind {
    id: KindId(4),
    letter: 'M',
    color: "37",
    sort_order: 4,
};

/// Transition operator for a card kind: the completion probability assuming
/// this kind is played from the given state and all subsequent plays are
/// optimal. Operators must not mutate the input state; they build successor
/// states and evaluate them through the solver passed in.
pub type PlayFn =
    Box<dyn Fn(KindId, &State, &KindsDb, &mut Solver) -> Result<Prob, Error> + Send + Sync>;

struct KindEntry {
    kind: CardKind,
    play: PlayFn,
}

/// Registry of playable card kinds, indexed densely by id with a letter
/// lookup for parsing hand specs. The set is open: callers may register
/// additional kinds implementing the same operator contract.
#[derive(Default)]
pub struct KindsDb {
    by_id: Vec<Option<KindEntry>>,
    letter_to_id: HashMap<char, KindId>,
}

impl KindsDb {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the five standard kinds.
    pub fn standard() -> Self {
        let mut db = Self::new();
        db.insert_entry(REACTOR, Box::new(play::play_reactor));
        db.insert_entry(THRUSTER, Box::new(play::play_thruster));
        db.insert_entry(SHIELD, Box::new(play::play_shield));
        db.insert_entry(DAMAGE, Box::new(play::play_damage));
        db.insert_entry(MISS, Box::new(play::play_miss));
        db
    }

    /// Registers a kind with its transition operator. Ids and display
    /// letters must be unique.
    pub fn register(&mut self, kind: CardKind, play: PlayFn) -> Result<(), Error> {
        if self.get(kind.id).is_some() {
            return Err(Error::DuplicateKind(kind.id));
        }
        if self.letter_to_id.contains_key(&kind.letter) {
            return Err(Error::DuplicateLetter(kind.letter));
        }
        self.insert_entry(kind, play);
        Ok(())
    }

    fn insert_entry(&mut self, kind: CardKind, play: PlayFn) {
        let idx = usize::from(kind.id.0);
        if idx >= self.by_id.len() {
            self.by_id.resize_with(idx + 1, || None);
        }
        self.letter_to_id.insert(kind.letter, kind.id);
        self.by_id[idx] = Some(KindEntry { kind, play });
    }

    #[inline]
    pub fn get(&self, id: KindId) -> Option<&CardKind> {
        self.by_id
            .get(usize::from(id.0))
            .and_then(|e| e.as_ref())
            .map(|e| &e.kind)
    }

    /// The transition operator for a registered kind.
    #[inline]
    pub fn play_fn(&self, id: KindId) -> Result<&PlayFn, Error> {
        self.by_id
            .get(usize::from(id.0))
            .and_then(|e| e.as_ref())
            .map(|e| &e.play)
            .ok_or(Error::UnknownKind(id))
    }

    #[inline]
    pub fn id_by_letter(&self, letter: char) -> Option<KindId> {
        self.letter_to_id.get(&letter).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.by_id.iter().filter(|e| e.is_some()).count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &CardKind> {
        self.by_id.iter().filter_map(|e| e.as_ref()).map(|e| &e.kind)
    }
}

/// The standard nine-card deck: 3 Reactor, 2 Thruster, 2 Shield, 2 Damage,
/// 1 Miss.
pub fn default_deck() -> Cards {
    Cards::from_pairs(&[
        (REACTOR.id, 3),
        (THRUSTER.id, 2),
        (SHIELD.id, 2),
        (DAMAGE.id, 2),
        (MISS.id, 1),
    ])
}
