use std::cmp;
use std::ops::{Add, AddAssign};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::errors::Error;
use crate::kinds::KindsDb;
use crate::types::{KindId, Prob};

/// Largest pile size `for_each_draw` accepts. Above this, the binomial
/// coefficients in the hypergeometric weights can overflow u64.
pub const MAX_ENUMERABLE_CARDS: usize = 62;

/// An unordered multiset of cards.
///
/// Entries are kept sorted by kind id with strictly positive counts, so the
/// derived equality and hashing are independent of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Cards {
    entries: Vec<(KindId, u8)>,
}

impl Cards {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: &[(KindId, u8)]) -> Self {
        let mut cards = Self::new();
        for &(kind, n) in pairs {
            Cards::add(&mut cards, kind, n);
        }
        cards
    }

    #[inline]
    fn position(&self, kind: KindId) -> Result<usize, usize> {
        self.entries.binary_search_by_key(&kind, |&(k, _)| k)
    }

    /// Adds `n` of the given kind. Adding 0 cards is a no-op.
    pub fn add(&mut self, kind: KindId, n: u8) {
        if n == 0 {
            return;
        }
        match self.position(kind) {
            Ok(i) => self.entries[i].1 += n,
            Err(i) => self.entries.insert(i, (kind, n)),
        }
    }

    #[inline]
    pub fn add_one(&mut self, kind: KindId) {
        self.add(kind, 1);
    }

    /// Removes `n` of the given kind. Removing 0 cards is a no-op; the entry
    /// is deleted when its count reaches zero.
    pub fn remove(&mut self, kind: KindId, n: u8) -> Result<(), Error> {
        if n == 0 {
            return Ok(());
        }
        let Ok(i) = self.position(kind) else {
            return Err(Error::NotEnoughCards {
                wanted: usize::from(n),
                present: 0,
            });
        };
        let present = self.entries[i].1;
        if present < n {
            return Err(Error::NotEnoughCards {
                wanted: usize::from(n),
                present: usize::from(present),
            });
        }
        if present == n {
            self.entries.remove(i);
        } else {
            self.entries[i].1 = present - n;
        }
        Ok(())
    }

    #[inline]
    pub fn remove_one(&mut self, kind: KindId) -> Result<(), Error> {
        self.remove(kind, 1)
    }

    /// Removes every card of the given kind.
    pub fn remove_all(&mut self, kind: KindId) -> Result<(), Error> {
        match self.position(kind) {
            Ok(i) => {
                self.entries.remove(i);
                Ok(())
            }
            Err(_) => Err(Error::NotEnoughCards {
                wanted: 1,
                present: 0,
            }),
        }
    }

    /// Total number of cards, counting duplicates.
    #[inline]
    pub fn size(&self) -> usize {
        self.entries.iter().map(|&(_, n)| usize::from(n)).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn count_of(&self, kind: KindId) -> u8 {
        match self.position(kind) {
            Ok(i) => self.entries[i].1,
            Err(_) => 0,
        }
    }

    /// Iterates `(kind, count)` entries in ascending kind order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (KindId, u8)> + '_ {
        self.entries.iter().copied()
    }

    /// Concatenated kind letters, one per card, in ascending kind-id order.
    /// Kinds missing from the registry render as '?'.
    pub fn to_string(&self, kinds: &KindsDb) -> String {
        let mut out = String::with_capacity(self.size());
        for (kind, count) in self.iter() {
            let letter = kinds.get(kind).map_or('?', |k| k.letter);
            for _ in 0..count {
                out.push(letter);
            }
        }
        out
    }

    /// Sorted, colorized rendering suitable for a terminal: groups ordered by
    /// `sort_order`, each prefixed with its ANSI SGR color escape, with a
    /// single trailing reset.
    pub fn to_console_string(&self, kinds: &KindsDb) -> String {
        if self.is_empty() {
            return "\x1b[90m<no cards>\x1b[0m".to_string();
        }

        let mut groups: Vec<(u16, char, &str, u8)> = self
            .iter()
            .map(|(kind, count)| match kinds.get(kind) {
                Some(k) => (k.sort_order, k.letter, k.color, count),
                None => (u16::MAX, '?', "90", count),
            })
            .collect();
        groups.sort_unstable_by_key(|&(order, ..)| order);

        let mut out = String::new();
        for (_, letter, color, count) in groups {
            out.push_str("\x1b[");
            out.push_str(color);
            out.push('m');
            for _ in 0..count {
                out.push(letter);
            }
        }
        out.push_str("\x1b[0m");
        out
    }

    /// Draws (up to) `n` cards uniformly without replacement.
    /// Returns `(remaining, drawn)`; asking for the whole pile or more draws
    /// everything deterministically.
    pub fn draw_random<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> (Cards, Cards) {
        let mut card_list: Vec<KindId> = Vec::with_capacity(self.size());
        for (kind, count) in self.iter() {
            for _ in 0..count {
                card_list.push(kind);
            }
        }
        if n >= card_list.len() {
            return (Cards::new(), self.clone());
        }

        let (drawn, rest) = card_list.partial_shuffle(rng, n);
        let mut drawn_cards = Cards::new();
        for &kind in drawn.iter() {
            drawn_cards.add_one(kind);
        }
        let mut remaining = Cards::new();
        for &kind in rest.iter() {
            remaining.add_one(kind);
        }
        (remaining, drawn_cards)
    }

    /// Enumerates every distinguishable outcome of drawing `n` cards
    /// uniformly without replacement, calling the visitor once per outcome:
    /// `f(remaining_pile, drawn, probability)`.
    ///
    /// Probabilities follow the multivariate hypergeometric law and sum to 1.
    /// Drawing from an empty pile yields a single no-op outcome; `n` above
    /// the pile size draws the whole pile deterministically. The enumeration
    /// order is not part of the contract.
    pub fn for_each_draw<F>(&self, n: usize, mut f: F) -> Result<(), Error>
    where
        F: FnMut(&Cards, &Cards, Prob) -> Result<(), Error>,
    {
        let total = self.size();
        if total > MAX_ENUMERABLE_CARDS {
            return Err(Error::DeckTooLarge { size: total });
        }
        if self.entries.is_empty() {
            // only one possible draw from an empty pile: nothing
            return f(&Cards::new(), &Cards::new(), 1.0);
        }

        let n = cmp::min(n, total);
        let norm = 1.0 / binomial(total as u64, n as u64) as f64;
        let mut drawn = vec![0u8; self.entries.len()];
        self.visit_draws(0, n, 1, &mut drawn, norm, &mut f)
    }

    fn visit_draws<F>(
        &self,
        idx: usize,
        still_to_draw: usize,
        numerator: u64,
        drawn: &mut [u8],
        norm: f64,
        f: &mut F,
    ) -> Result<(), Error>
    where
        F: FnMut(&Cards, &Cards, Prob) -> Result<(), Error>,
    {
        if still_to_draw == 0 {
            // drawn[idx..] is all zeros here, so this reads the whole outcome
            let mut remaining = Cards::new();
            let mut taken = Cards::new();
            for (i, &(kind, available)) in self.entries.iter().enumerate() {
                Cards::add(&mut taken, kind, drawn[i]);
                Cards::add(&mut remaining, kind, available - drawn[i]);
            }
            return f(&remaining, &taken, numerator as f64 * norm);
        }
        if idx == self.entries.len() {
            // ran out of kinds before drawing enough cards
            return Ok(());
        }

        let (_, available) = self.entries[idx];
        let take_max = cmp::min(usize::from(available), still_to_draw);
        for take in 0..=take_max {
            drawn[idx] = take as u8;
            let numer = numerator * binomial(u64::from(available), take as u64);
            self.visit_draws(idx + 1, still_to_draw - take, numer, drawn, norm, f)?;
        }
        drawn[idx] = 0;
        Ok(())
    }
}

impl AddAssign<&Cards> for Cards {
    fn add_assign(&mut self, other: &Cards) {
        for (kind, count) in other.iter() {
            self.add(kind, count);
        }
    }
}

impl Add<&Cards> for &Cards {
    type Output = Cards;

    fn add(self, other: &Cards) -> Cards {
        let mut out = self.clone();
        out += other;
        out
    }
}

/// Binomial coefficient in u64. Exact for every prefix product because the
/// running value is itself a binomial coefficient.
fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = cmp::min(k, n - k);
    let mut c: u64 = 1;
    for i in 0..k {
        c = c * (n - i) / (i + 1);
    }
    c
}
