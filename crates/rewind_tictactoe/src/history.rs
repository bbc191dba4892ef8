//! Rewindable move history for a single game.
//!
//! The history owns every board snapshot reached so far and a step pointer
//! into them. Moves always branch from the snapshot under the pointer;
//! anything recorded after it is discarded. Jumps only move the pointer.

use super::action::{Command, Rejection};
use super::contracts::{Contract, JumpContract, MoveContract};
use super::rules::{self, WinResult};
use super::snapshot::BoardSnapshot;
use super::status::GameStatus;
use super::types::{DisplayOrder, Player};
use tracing::{debug, instrument};

/// The game controller: recorded snapshots, step pointer and list order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHistory {
    pub(crate) snapshots: Vec<BoardSnapshot>,
    pub(crate) step: usize,
    order: DisplayOrder,
    last_move: Option<usize>,
}

impl GameHistory {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(DisplayOrder::default())
    }

    /// Creates an empty history whose move list starts in `order`.
    #[instrument]
    pub fn with_order(order: DisplayOrder) -> Self {
        Self {
            snapshots: vec![BoardSnapshot::initial()],
            step: 0,
            order,
            last_move: None,
        }
    }

    /// Replays moves from the initial board, stopping at the first rejected one.
    #[instrument]
    pub fn replay(moves: &[usize]) -> Result<Self, Rejection> {
        let mut history = Self::new();
        for &index in moves {
            history.try_apply_move(index)?;
        }
        Ok(history)
    }

    /// Returns every recorded snapshot, oldest first.
    pub fn snapshots(&self) -> &[BoardSnapshot] {
        &self.snapshots
    }

    /// Returns the step pointer.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Index of the newest recorded snapshot.
    pub fn latest_step(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// Returns the snapshot under the step pointer.
    pub fn current(&self) -> &BoardSnapshot {
        &self.snapshots[self.step]
    }

    /// Returns the move list order.
    pub fn order(&self) -> DisplayOrder {
        self.order
    }

    /// Index of the most recently placed mark.
    ///
    /// Jumping around the history does not change it.
    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    /// Player whose turn it is at the step pointer.
    pub fn to_move(&self) -> Player {
        Player::for_step(self.step)
    }

    /// Completed line on the current snapshot, if any.
    pub fn winner(&self) -> Option<WinResult> {
        rules::detect(self.current().board())
    }

    /// Derives the status of the current snapshot.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn status(&self) -> GameStatus {
        let board = self.current().board();
        if let Some(win) = rules::detect(board) {
            GameStatus::Winner(win.player())
        } else if rules::is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::ToMove(self.to_move())
        }
    }

    /// Places the next mark at `index`, silently ignoring illegal moves.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn apply_move(&mut self, index: usize) {
        if let Err(rejection) = self.try_apply_move(index) {
            debug!(%rejection, "Move ignored");
        }
    }

    /// Places the next mark at `index`.
    ///
    /// Snapshots after the step pointer are discarded, the new snapshot is
    /// appended, and the pointer moves onto it.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] when the index is off the board, the cell is
    /// taken, or the current snapshot already has a winner. The history is
    /// unchanged in that case.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn try_apply_move(&mut self, index: usize) -> Result<(), Rejection> {
        MoveContract::pre(self, &index)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.to_move();
        let next = self.current().after_move(index, player);
        self.snapshots.truncate(self.step + 1);
        self.snapshots.push(next);
        self.step = self.latest_step();
        self.last_move = Some(index);

        debug!(%player, index, step = self.step, "Move applied");

        #[cfg(debug_assertions)]
        {
            let checked = MoveContract::post(&before, self);
            debug_assert!(checked.is_ok(), "Move postcondition failed: {checked:?}");
        }

        Ok(())
    }

    /// Moves the step pointer to `step`, silently ignoring unknown steps.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to(&mut self, step: usize) {
        if let Err(rejection) = self.try_jump_to(step) {
            debug!(%rejection, "Jump ignored");
        }
    }

    /// Moves the step pointer to `step`.
    ///
    /// # Errors
    ///
    /// Returns [`Rejection::StepOutOfRange`] if no snapshot was recorded at `step`.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn try_jump_to(&mut self, step: usize) -> Result<(), Rejection> {
        JumpContract::pre(self, &step)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.step = step;
        debug!(step, "Jumped");

        #[cfg(debug_assertions)]
        {
            let checked = JumpContract::post(&before, self);
            debug_assert!(checked.is_ok(), "Jump postcondition failed: {checked:?}");
        }

        Ok(())
    }

    /// Flips the move list between ascending and descending order.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) {
        self.order = self.order.toggled();
        debug!(order = %self.order, "Order toggled");
    }

    /// Runs a command.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] of a move or jump that could not apply.
    #[instrument(skip(self))]
    pub fn execute(&mut self, command: Command) -> Result<(), Rejection> {
        match command {
            Command::Place(index) => self.try_apply_move(index),
            Command::JumpTo(step) => self.try_jump_to(step),
            Command::ToggleOrder => {
                self.toggle_order();
                Ok(())
            }
        }
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}
