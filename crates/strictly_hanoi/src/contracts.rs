//! Contract-based validation for Towers of Hanoi.
//!
//! Contracts define correctness through preconditions and postconditions,
//! Hoare-style: {P} action {Q}.

use super::invariants::{InvariantSet, MoveInvariants, describe};
use super::{Board, Move, MoveError};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the source pole holds a disk.
pub struct SourceNotEmpty;

impl SourceNotEmpty {
    /// Fails with [`MoveError::EmptySource`] if there is nothing to pick up.
    #[instrument(skip(board))]
    pub fn check(mv: &Move, board: &Board) -> Result<(), MoveError> {
        if board.is_empty(mv.from()) {
            Err(MoveError::EmptySource(mv.from()))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the moved disk lands on an empty pole or a larger disk.
pub struct SmallerOnLarger;

impl SmallerOnLarger {
    /// Fails with [`MoveError::LargerOnSmaller`] on a size violation.
    #[instrument(skip(board))]
    pub fn check(mv: &Move, board: &Board) -> Result<(), MoveError> {
        match (board.top(mv.from()), board.top(mv.to())) {
            (Some(disk), Some(onto)) if onto < disk => {
                Err(MoveError::LargerOnSmaller { disk, onto })
            }
            _ => Ok(()),
        }
    }
}

/// Composite precondition: both checks above.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(board))]
    pub fn check(mv: &Move, board: &Board) -> Result<(), MoveError> {
        SourceNotEmpty::check(mv, board)?;
        SmallerOnLarger::check(mv, board)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Source pole is not empty
/// - No larger disk on a smaller one
///
/// Postconditions:
/// - Every board invariant still holds
/// - The disk count is unchanged
pub struct MoveContract;

impl Contract<Board, Move> for MoveContract {
    fn pre(board: &Board, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, board)
    }

    fn post(before: &Board, after: &Board) -> Result<(), MoveError> {
        if before.disk_count() != after.disk_count() {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: disk count changed".to_string(),
            ));
        }
        MoveInvariants::check_all(after).map_err(|violations| {
            let descriptions = describe(&violations);
            warn!(%descriptions, "Move postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

impl Board {
    /// Applies a move in place.
    ///
    /// All or nothing: preconditions are checked before any mutation, and an
    /// illegal move leaves the board untouched. Postconditions are verified in
    /// debug builds, restoring the previous board on failure.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, mv: Move) -> Result<(), MoveError> {
        MoveContract::pre(self, &mv)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.transfer(mv.from(), mv.to());

        #[cfg(debug_assertions)]
        if let Err(e) = MoveContract::post(&before, self) {
            *self = before;
            return Err(e);
        }

        Ok(())
    }
}
