//! Pure Towers of Hanoi game logic.
//!
//! - [`Board`]: three poles of strictly decreasing disks
//! - [`rules`]: legality, solved detection, progress
//! - [`contracts`]: move preconditions and postconditions
//! - [`invariants`]: board invariants as composable sets
//! - [`solver`]: canonical solution, general-position plans and hints
//! - [`Game`]: a puzzle in play with move counter and history
//!
//! # Example
//!
//! ```
//! use strictly_hanoi::{Board, Pole, solver};
//!
//! let mut board = Board::new(3)?;
//! for mv in solver::solve(3) {
//!     board.apply_move(mv)?;
//! }
//! assert_eq!(board.pole(Pole::Right), &[3, 2, 1]);
//! # Ok::<(), strictly_hanoi::HanoiError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod error;
mod game;
pub mod invariants;
pub mod rules;
pub mod solver;
mod types;

pub use action::Move;
pub use contracts::{Contract, LegalMove, MoveContract, SmallerOnLarger, SourceNotEmpty};
pub use error::{ConfigError, HanoiError, MoveError};
pub use game::{DEFAULT_HISTORY_LIMIT, Game, GameStatus};
pub use invariants::{
    HanoiInvariants, Invariant, InvariantSet, InvariantViolation, MoveInvariants, describe,
};
pub use solver::{Solution, hint, solve, solve_from};
pub use types::{Board, Disk, MAX_DISKS, Pole};
