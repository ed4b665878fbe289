//! Game rules for Towers of Hanoi.
//!
//! Pure functions evaluating boards. Rules are separated from board storage
//! so they compose into the contract system.

pub mod legality;
pub mod solved;

pub use legality::{apply, check_legal, is_legal, legal_moves};
pub use solved::{is_solved, min_moves, progress};
