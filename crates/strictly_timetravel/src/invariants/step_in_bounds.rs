//! The navigation pointer never dangles.

use super::Invariant;
use crate::History;

/// Invariant: `0 <= current_step < snapshots.len()`.
pub struct StepInBoundsInvariant;

impl Invariant<History> for StepInBoundsInvariant {
    fn holds(history: &History) -> bool {
        history.current_step() < history.snapshots().len()
    }

    fn description() -> &'static str {
        "Current step indexes a recorded snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_history_holds() {
        assert!(StepInBoundsInvariant::holds(&History::new()));
    }

    #[test]
    fn test_dangling_pointer_violates() {
        let mut history = History::new();
        history.current_step = 1;
        assert!(!StepInBoundsInvariant::holds(&history));
    }
}
