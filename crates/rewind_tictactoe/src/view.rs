//! Render-ready view of a game history.
//!
//! A [`GameView`] is a pure function of a [`GameHistory`]. Front ends
//! rebuild it after every command and draw it without consulting the
//! history again.

use super::history::GameHistory;
use super::position::Coordinates;
use super::status::GameStatus;
use super::types::{Cell, DisplayOrder};
use derive_getters::Getters;
use serde::Serialize;
use tracing::instrument;

/// One board cell with its highlights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellView {
    /// Board index (0-8).
    pub index: usize,
    /// Contents of the cell in the current snapshot.
    pub cell: Cell,
    /// Part of the completed line.
    pub winning: bool,
    /// Target of the most recent move.
    pub last_move: bool,
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveEntry {
    /// Step this entry jumps to.
    pub step: usize,
    /// Where the move was played; `None` for the game start.
    pub coordinates: Option<Coordinates>,
    /// Button text.
    pub label: String,
    /// The step pointer is on this entry.
    pub current: bool,
}

impl MoveEntry {
    fn new(step: usize, coordinates: Option<Coordinates>, current: bool) -> Self {
        let label = match coordinates {
            Some(coordinates) if step > 0 => format!("Go to move #{} : {}", step, coordinates),
            _ => "Go to game start".to_string(),
        };
        Self {
            step,
            coordinates,
            label,
            current,
        }
    }
}

/// Everything a front end needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GameView {
    cells: Vec<CellView>,
    status: GameStatus,
    status_text: String,
    moves: Vec<MoveEntry>,
    step: usize,
    order: DisplayOrder,
    #[getter(skip)]
    order_toggle_label: &'static str,
}

impl GameView {
    /// Derives the view of the history's current state.
    #[instrument(skip(history), fields(step = history.step()))]
    pub fn from_history(history: &GameHistory) -> Self {
        let board = history.current().board();
        let winner = history.winner();
        let last_move = history.last_move();

        let cells = board
            .cells()
            .iter()
            .enumerate()
            .map(|(index, &cell)| CellView {
                index,
                cell,
                winning: winner.is_some_and(|win| win.contains(index)),
                last_move: last_move == Some(index),
            })
            .collect();

        let mut moves: Vec<MoveEntry> = history
            .snapshots()
            .iter()
            .enumerate()
            .map(|(step, snapshot)| {
                MoveEntry::new(step, snapshot.last_move(), step == history.step())
            })
            .collect();
        if history.order() == DisplayOrder::Descending {
            moves.reverse();
        }

        let status = history.status();
        Self {
            cells,
            status,
            status_text: status.to_string(),
            moves,
            step: history.step(),
            order: history.order(),
            order_toggle_label: history.order().toggle_label(),
        }
    }

    /// Text for the control that flips the move list order.
    pub fn order_toggle_label(&self) -> &'static str {
        self.order_toggle_label
    }

    /// Returns the cell at `index`.
    pub fn cell(&self, index: usize) -> Option<&CellView> {
        self.cells.get(index)
    }
}
