//! Commands accepted by the game history and the reasons they get rejected.
//!
//! Commands are domain events, not side effects. A front end turns user
//! input into commands; the history decides whether they apply.

use super::Player;
use serde::{Deserialize, Serialize};

/// A command issued against a [`GameHistory`](crate::GameHistory).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Command {
    /// Place the next player's mark at a board index (0-8).
    #[display("place at {}", _0)]
    Place(usize),
    /// Move the step pointer to a recorded snapshot.
    #[display("jump to step {}", _0)]
    JumpTo(usize),
    /// Flip the move list between ascending and descending order.
    #[display("toggle order")]
    ToggleOrder,
}

/// Why a command had no effect.
///
/// Rejections model illegal clicks: the silent command variants drop them,
/// the `try_` variants hand them back for logging or reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// The index is not on the board.
    #[display("Cell {} is outside the board (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The current snapshot already has a winner.
    #[display("Game already won by {}", _0)]
    GameOver(Player),

    /// The step is not in the history.
    #[display("Step {} is outside the history (length {})", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of recorded snapshots.
        len: usize,
    },
}

impl std::error::Error for Rejection {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_text() {
        assert_eq!(Command::Place(4).to_string(), "place at 4");
        assert_eq!(Command::JumpTo(2).to_string(), "jump to step 2");
        assert_eq!(Command::ToggleOrder.to_string(), "toggle order");
    }

    #[test]
    fn test_rejection_text() {
        assert_eq!(Rejection::CellOccupied(4).to_string(), "Cell 4 is already occupied");
        assert_eq!(
            Rejection::StepOutOfRange { step: 7, len: 3 }.to_string(),
            "Step 7 is outside the history (length 3)"
        );
    }
}
