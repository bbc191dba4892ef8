//! Contract-based validation for history commands.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} command {Q}. Preconditions decide whether a command is accepted;
//! postconditions confirm that an accepted command kept the history sound.

use super::action::Rejection;
use super::history::GameHistory;
use super::invariants::{InvariantSet, InvariantViolation, TimelineInvariants};
use super::rules;
use super::types::Board;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), InvariantViolation>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the index is on the board.
pub struct IndexInRange;

impl IndexInRange {
    /// Checks the precondition.
    pub fn check(index: usize) -> Result<(), Rejection> {
        if index < Board::SIZE {
            Ok(())
        } else {
            Err(Rejection::OutOfRange(index))
        }
    }
}

/// Precondition: the target cell is empty in the current snapshot.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Checks the precondition.
    pub fn check(index: usize, history: &GameHistory) -> Result<(), Rejection> {
        if history.current().board().is_empty(index) {
            Ok(())
        } else {
            Err(Rejection::CellOccupied(index))
        }
    }
}

/// Precondition: nobody has completed a line in the current snapshot.
pub struct NoWinnerYet;

impl NoWinnerYet {
    /// Checks the precondition.
    pub fn check(history: &GameHistory) -> Result<(), Rejection> {
        match rules::detect(history.current().board()) {
            Some(win) => Err(Rejection::GameOver(win.player())),
            None => Ok(()),
        }
    }
}

/// Composite precondition for placing a mark.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(history), fields(step = history.step()))]
    pub fn check(index: usize, history: &GameHistory) -> Result<(), Rejection> {
        IndexInRange::check(index)?;
        NoWinnerYet::check(history)?;
        CellIsEmpty::check(index, history)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark.
///
/// Preconditions:
/// - Index is on the board
/// - Current snapshot has no winner
/// - Target cell is empty
///
/// Postconditions:
/// - All history invariants hold
/// - History was cut back to the old step pointer and grew by one
/// - Snapshots up to the old step pointer are unchanged
/// - The step pointer is on the new snapshot
pub struct MoveContract;

impl Contract<GameHistory, usize> for MoveContract {
    fn pre(history: &GameHistory, index: &usize) -> Result<(), Rejection> {
        LegalMove::check(*index, history)
    }

    fn post(before: &GameHistory, after: &GameHistory) -> Result<(), InvariantViolation> {
        TimelineInvariants::check_all(after).map_err(InvariantViolation::join)?;

        let kept = before.step() + 1;
        if after.snapshots().len() != kept + 1 {
            warn!(
                before = before.snapshots().len(),
                after = after.snapshots().len(),
                "Move did not truncate at the step pointer"
            );
            return Err(InvariantViolation::new(
                "History was not truncated at the step pointer",
            ));
        }
        if after.snapshots()[..kept] != before.snapshots()[..kept] {
            return Err(InvariantViolation::new(
                "Snapshots before the step pointer changed",
            ));
        }
        if after.step() != after.latest_step() {
            return Err(InvariantViolation::new(
                "Step pointer is not on the newest snapshot",
            ));
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Jump Contract
// ─────────────────────────────────────────────────────────────

/// Precondition: the step is a recorded snapshot.
pub struct StepInRange;

impl StepInRange {
    /// Checks the precondition.
    pub fn check(step: usize, history: &GameHistory) -> Result<(), Rejection> {
        let len = history.snapshots().len();
        if step < len {
            Ok(())
        } else {
            Err(Rejection::StepOutOfRange { step, len })
        }
    }
}

/// Contract for moving the step pointer.
///
/// Jumps never touch recorded snapshots or the last-move marker.
pub struct JumpContract;

impl Contract<GameHistory, usize> for JumpContract {
    fn pre(history: &GameHistory, step: &usize) -> Result<(), Rejection> {
        StepInRange::check(*step, history)
    }

    fn post(before: &GameHistory, after: &GameHistory) -> Result<(), InvariantViolation> {
        TimelineInvariants::check_all(after).map_err(InvariantViolation::join)?;

        if after.snapshots() != before.snapshots() {
            return Err(InvariantViolation::new("Jump altered recorded snapshots"));
        }
        if after.last_move() != before.last_move() {
            return Err(InvariantViolation::new("Jump altered the last move"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Player};

    #[test]
    fn test_precondition_empty_cell() {
        let history = GameHistory::new();
        assert!(MoveContract::pre(&history, &4).is_ok());
    }

    #[test]
    fn test_precondition_out_of_range() {
        let history = GameHistory::new();
        assert_eq!(MoveContract::pre(&history, &9), Err(Rejection::OutOfRange(9)));
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let history = GameHistory::replay(&[4]).expect("legal move");
        assert_eq!(MoveContract::pre(&history, &4), Err(Rejection::CellOccupied(4)));
    }

    #[test]
    fn test_precondition_after_win() {
        let history = GameHistory::replay(&[0, 4, 1, 3, 2]).expect("legal moves");
        assert_eq!(
            MoveContract::pre(&history, &8),
            Err(Rejection::GameOver(Player::X))
        );
    }

    #[test]
    fn test_postcondition_holds_after_rewound_move() {
        let mut before = GameHistory::replay(&[0, 4, 8]).expect("legal moves");
        before.jump_to(1);
        let mut after = before.clone();
        after.apply_move(2);
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_kept_redo_branch() {
        let mut before = GameHistory::replay(&[0, 4, 8]).expect("legal moves");
        before.jump_to(1);
        let mut after = before.clone();
        after.apply_move(2);
        after.snapshots.insert(2, before.snapshots()[2]);
        assert!(MoveContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = GameHistory::new();
        let mut after = before.clone();
        after.apply_move(4);
        after.snapshots[1].board_mut().set(0, Cell::Occupied(Player::O));
        assert!(MoveContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_jump_contract() {
        let before = GameHistory::replay(&[0, 4]).expect("legal moves");
        assert_eq!(
            JumpContract::pre(&before, &3),
            Err(Rejection::StepOutOfRange { step: 3, len: 3 })
        );

        let mut after = before.clone();
        after.jump_to(0);
        assert!(JumpContract::post(&before, &after).is_ok());

        after.snapshots.truncate(1);
        assert!(JumpContract::post(&before, &after).is_err());
    }
}
