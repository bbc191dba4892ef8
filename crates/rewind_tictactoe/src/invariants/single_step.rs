//! Single step invariant: each snapshot adds exactly one mark to the previous one.

use super::super::GameHistory;
use super::{Invariant, placed_mark};

/// Invariant: snapshot `i` differs from snapshot `i - 1` in exactly one
/// cell, and that cell was empty before.
pub struct SingleStepInvariant;

impl Invariant<GameHistory> for SingleStepInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .snapshots()
            .windows(2)
            .all(|pair| placed_mark(pair[0].board(), pair[1].board()).is_some())
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to an empty cell"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Player};

    #[test]
    fn test_full_game_holds() {
        let history = GameHistory::replay(&[0, 1, 2, 3, 4, 6, 5, 8, 7]).expect("legal moves");
        assert!(SingleStepInvariant::holds(&history));
    }

    #[test]
    fn test_extra_mark_violates() {
        let mut history = GameHistory::replay(&[4, 0]).expect("legal moves");
        history.snapshots[2].board_mut().set(8, Cell::Occupied(Player::X));
        assert!(!SingleStepInvariant::holds(&history));
    }

    #[test]
    fn test_overwritten_mark_violates() {
        let mut history = GameHistory::replay(&[4, 0]).expect("legal moves");
        history.snapshots[2].board_mut().set(0, Cell::Empty);
        history.snapshots[2].board_mut().set(4, Cell::Occupied(Player::O));
        assert!(!SingleStepInvariant::holds(&history));
    }
}
