//! Named board cells and 1-based move coordinates.

use derive_more::Display;
use derive_new::new;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A cell on the tic-tac-toe board, by name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (index 0)
    #[display("Top-left")]
    TopLeft,
    /// Top-center (index 1)
    #[display("Top-center")]
    TopCenter,
    /// Top-right (index 2)
    #[display("Top-right")]
    TopRight,
    /// Middle-left (index 3)
    #[display("Middle-left")]
    MiddleLeft,
    /// Center (index 4)
    #[display("Center")]
    Center,
    /// Middle-right (index 5)
    #[display("Middle-right")]
    MiddleRight,
    /// Bottom-left (index 6)
    #[display("Bottom-left")]
    BottomLeft,
    /// Bottom-center (index 7)
    #[display("Bottom-center")]
    BottomCenter,
    /// Bottom-right (index 8)
    #[display("Bottom-right")]
    BottomRight,
}

impl Position {
    /// Parses a board index (0-8) or a label.
    ///
    /// Labels match case-insensitively and treat `-`, `_` and spaces alike,
    /// so `top_left`, `Top left` and `top-left` are the same cell.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(index) = s.parse::<usize>() {
            return Self::from_index(index);
        }

        let wanted = normalize(s);
        Position::iter().find(|pos| normalize(&pos.to_string()) == wanted)
    }

    /// Converts to a board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates a position from a board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Position::iter().nth(index)
    }

    /// 1-based row and column of this cell.
    pub fn coordinates(self) -> Coordinates {
        Coordinates::from(self)
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Row and column of a move in 1-based display coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, new)]
#[display("[{}, {}]", row, col)]
pub struct Coordinates {
    /// Row, 1 at the top.
    pub row: u8,
    /// Column, 1 at the left.
    pub col: u8,
}

impl From<Position> for Coordinates {
    fn from(position: Position) -> Self {
        let (row, col) = match position {
            Position::TopLeft => (1, 1),
            Position::TopCenter => (1, 2),
            Position::TopRight => (1, 3),
            Position::MiddleLeft => (2, 1),
            Position::Center => (2, 2),
            Position::MiddleRight => (2, 3),
            Position::BottomLeft => (3, 1),
            Position::BottomCenter => (3, 2),
            Position::BottomRight => (3, 3),
        };
        Self::new(row, col)
    }
}
