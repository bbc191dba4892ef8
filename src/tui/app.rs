//! Application state for the interactive game.

use std::ops::ControlFlow;

use rewind_tictactoe::{GameHistory, GameView, Position};
use tracing::{debug, instrument};

use super::input::{Action, move_cursor};
use crate::config::Settings;

/// Main application state: the game history plus the board cursor.
#[derive(Debug)]
pub struct App {
    history: GameHistory,
    cursor: Position,
    settings: Settings,
}

impl App {
    /// Creates a new application with an empty board.
    #[instrument(skip(settings))]
    pub fn new(settings: Settings) -> Self {
        Self {
            history: GameHistory::with_order(*settings.order()),
            cursor: Position::Center,
            settings,
        }
    }

    /// Gets the game history.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Derives the view to draw.
    pub fn view(&self) -> GameView {
        GameView::from_history(&self.history)
    }

    /// Handles one action to completion.
    ///
    /// Returns `Break` when the user asked to quit.
    #[instrument(skip(self), fields(step = self.history.step()))]
    pub fn handle(&mut self, action: Action) -> ControlFlow<()> {
        debug!(?action, "Handling action");

        match action {
            Action::Place(position) => {
                self.cursor = position;
                self.history.apply_move(position.to_index());
            }
            Action::PlaceAtCursor => self.history.apply_move(self.cursor.to_index()),
            Action::Cursor(key) => self.cursor = move_cursor(self.cursor, key),
            Action::StepBack => {
                if let Some(step) = self.history.step().checked_sub(1) {
                    self.history.jump_to(step);
                }
            }
            Action::StepForward => self.history.jump_to(self.history.step() + 1),
            Action::JumpToStart => self.history.jump_to(0),
            Action::JumpToLatest => self.history.jump_to(self.history.latest_step()),
            Action::ToggleOrder => self.history.toggle_order(),
            Action::Quit => return ControlFlow::Break(()),
            Action::Ignore => {}
        }

        ControlFlow::Continue(())
    }
}
