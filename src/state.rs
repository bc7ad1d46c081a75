use crate::cards::Cards;
use crate::errors::Error;
use crate::kinds::KindsDb;
use crate::requirements::Requirements;

/// A snapshot of the game while working a contract: the remaining action
/// budget, the hand, the draw pile (composition known, order unknown), and
/// the requirements still to fulfill.
///
/// States are values; the solver memoizes on their structural equality, so
/// two equal states are interchangeable no matter how they were reached.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    pub actions: u32,
    pub hand: Cards,
    pub draw_pile: Cards,
    pub requirements: Requirements,
}

impl State {
    /// Validating constructor: every kind in the hand and draw pile must be
    /// registered.
    pub fn new(
        actions: u32,
        hand: Cards,
        draw_pile: Cards,
        requirements: Requirements,
        kinds: &KindsDb,
    ) -> Result<Self, Error> {
        for (kind, _) in hand.iter().chain(draw_pile.iter()) {
            if kinds.get(kind).is_none() {
                return Err(Error::UnknownKind(kind));
            }
        }
        Ok(Self {
            actions,
            hand,
            draw_pile,
            requirements,
        })
    }

    /// Total cards still in play (hand plus draw pile).
    #[inline]
    pub fn deck_size(&self) -> usize {
        self.hand.size() + self.draw_pile.size()
    }
}
