//! Derived game status.

use super::Player;
use serde::{Deserialize, Serialize};

/// Status of the snapshot the step pointer is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// A player completed a line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// The board is full with no completed line.
    #[display("Draw")]
    Draw,
    /// The game continues with this player to move.
    #[display("Next player: {}", _0)]
    ToMove(Player),
}

impl GameStatus {
    /// True once no further move can be made from this snapshot.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::ToMove(_))
    }
}
