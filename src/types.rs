/// Probabilities are 64-bit floats throughout the solver.
pub type Prob = f64;

/// Stable identity of a card kind. Used as the multiset key; the descriptor
/// attributes live in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KindId(pub u16);
