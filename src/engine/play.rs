use crate::errors::Error;
use crate::kinds::KindsDb;
use crate::solver::Solver;
use crate::state::State;
use crate::types::{KindId, Prob};

/// Cards drawn when a Thruster resolves.
const THRUSTER_DRAW: usize = 2;

/// Pay 1 action, gain 2 (net +1), fulfill one reactor requirement.
pub fn play_reactor(
    kind: KindId,
    state: &State,
    kinds: &KindsDb,
    solver: &mut Solver,
) -> Result<Prob, Error> {
    let Some(paid) = state.actions.checked_sub(1) else {
        return Ok(0.0);
    };
    let mut next = state.clone();
    next.hand.remove_one(kind)?;
    next.actions = paid + 2;
    next.requirements.sub_reactors(1);
    solver.completion_probability(&next, kinds)
}

/// Fulfill one thruster requirement, then draw 2 cards. The successor value
/// is the draw-weighted sum over every distinguishable outcome.
pub fn play_thruster(
    kind: KindId,
    state: &State,
    kinds: &KindsDb,
    solver: &mut Solver,
) -> Result<Prob, Error> {
    let Some(actions) = state.actions.checked_sub(1) else {
        return Ok(0.0);
    };
    let mut hand = state.hand.clone();
    hand.remove_one(kind)?;
    let mut requirements = state.requirements;
    requirements.sub_thrusters(1);

    let mut total = 0.0;
    state.draw_pile.for_each_draw(THRUSTER_DRAW, |pile, drawn, prob| {
        let next = State {
            actions,
            hand: &hand + drawn,
            draw_pile: pile.clone(),
            requirements,
        };
        total += prob * solver.completion_probability(&next, kinds)?;
        Ok(())
    })?;
    Ok(total)
}

/// Fulfill one shield requirement.
// TODO: hazard dice are not modeled yet; once they are, a Shield should also
// lower the pending hazard.
pub fn play_shield(
    kind: KindId,
    state: &State,
    kinds: &KindsDb,
    solver: &mut Solver,
) -> Result<Prob, Error> {
    let Some(actions) = state.actions.checked_sub(1) else {
        return Ok(0.0);
    };
    let mut next = state.clone();
    next.hand.remove_one(kind)?;
    next.actions = actions;
    next.requirements.sub_shields(1);
    solver.completion_probability(&next, kinds)
}

/// Fulfill one damage requirement.
pub fn play_damage(
    kind: KindId,
    state: &State,
    kinds: &KindsDb,
    solver: &mut Solver,
) -> Result<Prob, Error> {
    let Some(actions) = state.actions.checked_sub(1) else {
        return Ok(0.0);
    };
    let mut next = state.clone();
    next.hand.remove_one(kind)?;
    next.actions = actions;
    next.requirements.sub_damage(1);
    solver.completion_probability(&next, kinds)
}

/// A dud: spends the action and the card, fulfills nothing.
pub fn play_miss(
    kind: KindId,
    state: &State,
    kinds: &KindsDb,
    solver: &mut Solver,
) -> Result<Prob, Error> {
    let Some(actions) = state.actions.checked_sub(1) else {
        return Ok(0.0);
    };
    let mut next = state.clone();
    next.hand.remove_one(kind)?;
    next.actions = actions;
    solver.completion_probability(&next, kinds)
}
