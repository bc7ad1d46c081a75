#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited
#![allow(clippy::cast_precision_loss)]

pub mod types;
pub mod errors;
pub mod cards;
pub mod requirements;
pub mod state;
pub mod kinds;
pub mod contracts;
pub mod rng;
pub mod sim;

pub mod engine {
    pub mod play;
}

pub mod solver;

// Re-exports: stable minimal API surface for external callers
pub use crate::cards::{Cards, MAX_ENUMERABLE_CARDS};
pub use crate::contracts::{
    load_contracts_from_json, Contract, ContractKind, ContractsDb, Rewards,
};
pub use crate::errors::Error;
pub use crate::kinds::{
    default_deck, CardKind, KindsDb, PlayFn, DAMAGE, MISS, REACTOR, SHIELD, THRUSTER,
};
pub use crate::requirements::Requirements;
pub use crate::rng::rng_for_trial;
pub use crate::sim::{expected_best_offer_credits, SimConfig, SimReport};
pub use crate::solver::Solver;
pub use crate::state::State;
pub use crate::types::{KindId, Prob};
