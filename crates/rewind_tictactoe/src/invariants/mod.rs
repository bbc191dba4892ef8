//! First-class invariants for the game history.
//!
//! Invariants are logical properties that must hold after every command.
//! They are testable independently and serve as documentation of system guarantees.

use super::{Board, Player};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    /// Folds several violations into one.
    pub fn join(violations: Vec<InvariantViolation>) -> Self {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        Self::new(descriptions)
    }
}

impl std::error::Error for InvariantViolation {}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of two and three invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Finds the single mark added between two consecutive boards.
///
/// Returns `None` unless exactly one cell changed and it went from
/// empty to occupied.
pub(crate) fn placed_mark(before: &Board, after: &Board) -> Option<(usize, Player)> {
    let mut changed = before
        .cells()
        .iter()
        .zip(after.cells())
        .enumerate()
        .filter(|(_, (old, new))| old != new);

    let (index, (old, new)) = changed.next()?;
    if changed.next().is_some() || !old.is_empty() {
        return None;
    }
    new.player().map(|player| (index, player))
}

pub mod alternating_turn;
pub mod single_step;
pub mod step_bounds;

pub use alternating_turn::AlternatingTurnInvariant;
pub use single_step::SingleStepInvariant;
pub use step_bounds::StepBoundsInvariant;

/// All history invariants as a composable set.
pub type TimelineInvariants = (
    StepBoundsInvariant,
    SingleStepInvariant,
    AlternatingTurnInvariant,
);
