//! Step bounds invariant: the pointer always lands on a recorded snapshot.

use super::super::{BoardSnapshot, GameHistory};
use super::Invariant;

/// Invariant: history is non-empty, starts from the empty board, and the
/// step pointer is within it.
pub struct StepBoundsInvariant;

impl Invariant<GameHistory> for StepBoundsInvariant {
    fn holds(history: &GameHistory) -> bool {
        let snapshots = history.snapshots();
        snapshots.first() == Some(&BoardSnapshot::initial()) && history.step() < snapshots.len()
    }

    fn description() -> &'static str {
        "History starts from the empty board and the step pointer is in range"
    }
}
