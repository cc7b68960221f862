//! Invariants that every reachable [`History`](crate::History) satisfies.
//!
//! Each invariant is a separate type so it can be tested on its own and
//! composed into sets.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples of up to four invariants.
pub trait InvariantSet<S> {
    /// Returns every violated invariant, or `Ok(())` if all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        check::<S, I4>(state, &mut violations);
        into_result(violations)
    }
}

pub mod alternating_mark;
pub mod genesis_empty;
pub mod single_cell_delta;
pub mod step_in_bounds;

pub use alternating_mark::AlternatingMarkInvariant;
pub use genesis_empty::GenesisEmptyInvariant;
pub use single_cell_delta::SingleCellDeltaInvariant;
pub use step_in_bounds::StepInBoundsInvariant;

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    GenesisEmptyInvariant,
    StepInBoundsInvariant,
    SingleCellDeltaInvariant,
    AlternatingMarkInvariant,
);


#[cfg(test)]
mod tests {
    use super::fixtures::forged;
    use super::*;
    use crate::{GameState, History, Mark};

    #[test]
    fn test_invariant_set_holds_for_new_history() {
        assert!(HistoryInvariants::check_all(&History::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_play_and_branch() {
        let mut game = GameState::replay(&[0, 4, 1, 7]);
        game.jump_to(2);
        game.apply_move(8);
        assert!(HistoryInvariants::check_all(game.history()).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        // O moves first and the pointer dangles.
        let mut history = forged(&[(Mark::O, 4)]);
        history.current_step = 5;

        let violations = HistoryInvariants::check_all(&history).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert!(violations.contains(&InvariantViolation::new(
            AlternatingMarkInvariant::description()
        )));
        assert!(violations.contains(&InvariantViolation::new(
            StepInBoundsInvariant::description()
        )));
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (GenesisEmptyInvariant, StepInBoundsInvariant);
        assert!(TwoInvariants::check_all(&History::new()).is_ok());
    }
}
