use thiserror::Error;

use crate::types::KindId;

/// Failures surfaced by the multiset, the kind registry, and state
/// construction. The solver adds no error paths of its own; anything an
/// operator raises propagates unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("tried to take {wanted} cards of a kind with {present} present")]
    NotEnoughCards { wanted: usize, present: usize },

    #[error(
        "pile of {size} cards is too large for exact draw enumeration (max {max})",
        max = crate::cards::MAX_ENUMERABLE_CARDS
    )]
    DeckTooLarge { size: usize },

    #[error("card kind {0:?} is not registered")]
    UnknownKind(KindId),

    #[error("card kind {0:?} is already registered")]
    DuplicateKind(KindId),

    #[error("display letter '{0}' is already registered")]
    DuplicateLetter(char),
}
