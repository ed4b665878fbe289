//! Move legality.

use super::super::{Board, Move, MoveError, Pole};
use tracing::instrument;

/// Checks a move against the board, naming the reason on failure.
///
/// A move is illegal if the source pole is empty, or if the destination's
/// top disk is smaller than the source's top disk.
#[instrument(skip(board))]
pub fn check_legal(board: &Board, mv: Move) -> Result<(), MoveError> {
    let disk = board
        .top(mv.from())
        .ok_or(MoveError::EmptySource(mv.from()))?;

    match board.top(mv.to()) {
        Some(onto) if onto < disk => Err(MoveError::LargerOnSmaller { disk, onto }),
        _ => Ok(()),
    }
}

/// Whether a move may be applied to the board.
pub fn is_legal(board: &Board, mv: Move) -> bool {
    check_legal(board, mv).is_ok()
}

/// Returns the board after a legal move, leaving the input untouched.
#[instrument(skip(board))]
pub fn apply(board: &Board, mv: Move) -> Result<Board, MoveError> {
    let mut next = board.clone();
    next.apply_move(mv)?;
    Ok(next)
}

/// Every legal move from the board, in (source, destination) index order.
#[instrument(skip(board))]
pub fn legal_moves(board: &Board) -> Vec<Move> {
    Pole::ALL
        .into_iter()
        .flat_map(|from| Pole::ALL.into_iter().map(move |to| (from, to)))
        .filter_map(|(from, to)| Move::new(from, to).ok())
        .filter(|&mv| is_legal(board, mv))
        .collect()
}
