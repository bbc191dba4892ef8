//! Immutable board snapshots recorded in the move history.

use super::position::{Coordinates, Position};
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// One board state in the game history.
///
/// The initial snapshot has an empty board and no move coordinates.
/// Every later snapshot records where the move that produced it was played.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardSnapshot {
    board: Board,
    last_move: Option<Coordinates>,
}

impl BoardSnapshot {
    /// The empty starting board.
    pub fn initial() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Coordinates of the move that produced this snapshot.
    pub fn last_move(&self) -> Option<Coordinates> {
        self.last_move
    }

    /// Builds the snapshot that follows this one when `player` plays `index`.
    ///
    /// Off-board indices leave the board as is and record no coordinates.
    pub(crate) fn after_move(&self, index: usize, player: Player) -> Self {
        Self {
            board: self.board.placed(index, player),
            last_move: Position::from_index(index).map(Position::coordinates),
        }
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_initial_snapshot_is_empty() {
        let snapshot = BoardSnapshot::initial();
        assert_eq!(snapshot.board().occupied(), 0);
        assert_eq!(snapshot.last_move(), None);
    }

    #[test]
    fn test_after_move_records_coordinates() {
        let first = BoardSnapshot::initial();
        let second = first.after_move(5, Player::X);
        assert_eq!(second.board().get(5), Some(Cell::Occupied(Player::X)));
        assert_eq!(second.last_move(), Some(Coordinates::new(2, 3)));
        assert_eq!(first, BoardSnapshot::initial());
    }

    #[test]
    fn test_after_move_off_board_records_nothing() {
        let next = BoardSnapshot::initial().after_move(300, Player::O);
        assert_eq!(next, BoardSnapshot::initial());
    }
}
