//! Pure tic-tac-toe logic with a rewindable move history.
//!
//! # Architecture
//!
//! - **Rules**: win and draw detection over a single board
//! - **History**: every snapshot reached so far, a step pointer, and the
//!   move/jump/reorder commands that drive them
//! - **Contracts**: preconditions that decide whether a command applies,
//!   postconditions and invariants that check the result in debug builds
//! - **View**: an immutable, serializable model for front ends
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameHistory, GameStatus, Player};
//!
//! let mut history = GameHistory::new();
//! for index in [0, 4, 1, 3, 2] {
//!     history.apply_move(index);
//! }
//! assert_eq!(history.status(), GameStatus::Winner(Player::X));
//!
//! // Rewind and branch: the old continuation is discarded.
//! history.jump_to(2);
//! history.apply_move(8);
//! assert_eq!(history.snapshots().len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod snapshot;
mod status;
mod types;
mod view;

pub use action::{Command, Rejection};
pub use contracts::{
    CellIsEmpty, Contract, IndexInRange, JumpContract, LegalMove, MoveContract, NoWinnerYet,
    StepInRange,
};
pub use history::GameHistory;
pub use invariants::{Invariant, InvariantSet, InvariantViolation, TimelineInvariants};
pub use position::{Coordinates, Position};
pub use rules::WinResult;
pub use snapshot::BoardSnapshot;
pub use status::GameStatus;
pub use types::{Board, Cell, DisplayOrder, Player};
pub use view::{CellView, GameView, MoveEntry};
