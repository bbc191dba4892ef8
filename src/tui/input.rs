//! Keyboard mapping for the interactive game.

use crossterm::event::KeyCode;
use rewind_tictactoe::Position;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place a mark at a named cell.
    Place(Position),
    /// Place a mark under the cursor.
    PlaceAtCursor,
    /// Move the cursor one cell.
    Cursor(KeyCode),
    /// Jump one step back in the history.
    StepBack,
    /// Jump one step forward in the history.
    StepForward,
    /// Jump to the empty starting board.
    JumpToStart,
    /// Jump to the newest snapshot.
    JumpToLatest,
    /// Flip the move list order.
    ToggleOrder,
    /// Leave the game.
    Quit,
    /// Key without a binding.
    Ignore,
}

/// Maps a key to an action.
///
/// Digits 1-9 address cells left to right, top to bottom: `1` is the
/// top-left cell.
pub fn map_key(code: KeyCode) -> Action {
    match code {
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map_or(Action::Ignore, Action::Place),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Action::Cursor(code),
        KeyCode::Enter | KeyCode::Char(' ') => Action::PlaceAtCursor,
        KeyCode::Char('b') | KeyCode::PageUp => Action::StepBack,
        KeyCode::Char('n') | KeyCode::PageDown => Action::StepForward,
        KeyCode::Home => Action::JumpToStart,
        KeyCode::End => Action::JumpToLatest,
        KeyCode::Char('r') => Action::ToggleOrder,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::Ignore,
    }
}

/// Moves the cursor with the arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.to_index();
    let (row, col) = (index / 3, index % 3);

    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };

    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_map_to_cells() {
        assert_eq!(map_key(KeyCode::Char('1')), Action::Place(Position::TopLeft));
        assert_eq!(map_key(KeyCode::Char('5')), Action::Place(Position::Center));
        assert_eq!(map_key(KeyCode::Char('9')), Action::Place(Position::BottomRight));
        assert_eq!(map_key(KeyCode::Char('0')), Action::Ignore);
    }

    #[test]
    fn test_history_keys() {
        assert_eq!(map_key(KeyCode::PageUp), Action::StepBack);
        assert_eq!(map_key(KeyCode::Char('n')), Action::StepForward);
        assert_eq!(map_key(KeyCode::Home), Action::JumpToStart);
        assert_eq!(map_key(KeyCode::End), Action::JumpToLatest);
        assert_eq!(map_key(KeyCode::Char('r')), Action::ToggleOrder);
        assert_eq!(map_key(KeyCode::Esc), Action::Quit);
    }

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::MiddleRight, KeyCode::Down), Position::BottomRight);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::Center, KeyCode::Tab), Position::Center);
    }
}
