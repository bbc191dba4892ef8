//! Alternating turn invariant: X and O take turns, X first.

use super::super::{GameHistory, Player};
use super::{Invariant, placed_mark};

/// Invariant: the mark added in snapshot `i` belongs to the player who
/// moves when the step pointer is at `i - 1`.
pub struct AlternatingTurnInvariant;

impl Invariant<GameHistory> for AlternatingTurnInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| {
                placed_mark(pair[0].board(), pair[1].board())
                    .is_none_or(|(_, player)| player == Player::for_step(step))
            })
    }

    fn description() -> &'static str {
        "Players alternate, starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_empty_history_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameHistory::new()));
    }

    #[test]
    fn test_alternating_moves_hold() {
        let history = GameHistory::replay(&[0, 4, 8, 2]).expect("legal moves");
        assert!(AlternatingTurnInvariant::holds(&history));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut history = GameHistory::replay(&[0, 4]).expect("legal moves");
        history.snapshots[2].board_mut().set(4, Cell::Occupied(Player::X));
        assert!(!AlternatingTurnInvariant::holds(&history));
    }
}
