//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in the order they are checked.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// A completed line of three marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinResult {
    player: Player,
    line: [usize; 3],
}

impl WinResult {
    /// The player who owns the line.
    pub fn player(&self) -> Player {
        self.player
    }

    /// The three cell indices of the line.
    pub fn line(&self) -> [usize; 3] {
        self.line
    }

    /// Checks if `index` is part of the winning line.
    pub fn contains(&self, index: usize) -> bool {
        self.line.contains(&index)
    }
}

/// Finds the first completed line on the board.
///
/// Returns the owning player and the line, or `None` when no row,
/// column or diagonal holds three identical marks.
#[instrument]
pub fn detect(board: &Board) -> Option<WinResult> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line;
        let player = board.get(a)?.player()?;
        (board.get(b) == board.get(a) && board.get(c) == board.get(a))
            .then_some(WinResult { player, line })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    fn board_with(marks: &[(usize, Player)]) -> Board {
        marks
            .iter()
            .fold(Board::new(), |board, &(index, player)| board.placed(index, player))
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(detect(&Board::new()), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            for player in [Player::X, Player::O] {
                let board = board_with(&line.map(|index| (index, player)));
                let win = detect(&board).expect("line should win");
                assert_eq!(win.player(), player);
                assert_eq!(win.line(), line);
            }
        }
    }

    #[test]
    fn test_every_line_is_detected_whatever_fills_the_rest() {
        let marks = [Cell::Empty, Cell::Occupied(Player::X), Cell::Occupied(Player::O)];
        for line in LINES {
            let rest: Vec<usize> = (0..Board::SIZE).filter(|i| !line.contains(i)).collect();
            for player in [Player::X, Player::O] {
                let mut checked = 0;
                for fill in 0..3usize.pow(rest.len() as u32) {
                    let mut board = board_with(&line.map(|index| (index, player)));
                    let mut code = fill;
                    for &index in &rest {
                        board.set(index, marks[code % 3]);
                        code /= 3;
                    }

                    let complete = LINES
                        .iter()
                        .filter(|other| {
                            let first = board.get(other[0]);
                            first != Some(Cell::Empty)
                                && other.iter().all(|&i| board.get(i) == first)
                        })
                        .count();
                    if complete > 1 {
                        continue;
                    }

                    let win = detect(&board).expect("line should win");
                    assert_eq!(win.player(), player, "board {:?}", board);
                    assert_eq!(win.line(), line, "board {:?}", board);
                    checked += 1;
                }
                assert!(checked > 0);
            }
        }
    }

    #[test]
    fn test_line_found_among_other_marks() {
        // X X X / O O . / . . .
        let board = board_with(&[
            (0, Player::X),
            (3, Player::O),
            (1, Player::X),
            (4, Player::O),
            (2, Player::X),
        ]);
        let win = detect(&board).expect("top row");
        assert_eq!(win.player(), Player::X);
        assert_eq!(win.line(), [0, 1, 2]);
        assert!(win.contains(1));
        assert!(!win.contains(4));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[(0, Player::X), (1, Player::X), (2, Player::O)]);
        assert_eq!(detect(&board), None);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // X X X / X . . / X . . completes both the top row and the left column.
        let board = board_with(&[
            (0, Player::X),
            (1, Player::X),
            (2, Player::X),
            (3, Player::X),
            (6, Player::X),
        ]);
        assert_eq!(detect(&board).map(|win| win.line()), Some([0, 1, 2]));
    }

    #[test]
    fn test_full_board_without_line() {
        // X O X / O X X / O X O
        let board = board_with(&[
            (0, Player::X),
            (1, Player::O),
            (2, Player::X),
            (3, Player::O),
            (4, Player::X),
            (5, Player::X),
            (6, Player::O),
            (7, Player::X),
            (8, Player::O),
        ]);
        assert_eq!(detect(&board), None);
    }
}
