//! Solved detection and progress.

use super::super::{Board, Pole};
use tracing::instrument;

/// Whether every disk sits on the target pole.
#[instrument(skip(board))]
pub fn is_solved(board: &Board, target: Pole) -> bool {
    board.pole(target).len() == usize::from(board.disk_count())
}

/// Percentage (0-100) of disks already on the target pole.
pub fn progress(board: &Board, target: Pole) -> f64 {
    board.pole(target).len() as f64 / f64::from(board.disk_count()) * 100.0
}

/// Minimum number of moves to transfer a tower of `disk_count` disks.
///
/// Saturates at `u64::MAX` from 64 disks up.
pub fn min_moves(disk_count: u8) -> u64 {
    1u64.checked_shl(u32::from(disk_count))
        .map_or(u64::MAX, |power| power - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_not_solved() {
        let board = Board::new(3).unwrap();
        assert!(!is_solved(&board, Pole::Right));
        assert_eq!(progress(&board, Pole::Right), 0.0);
    }

    #[test]
    fn test_only_target_pole_counts() {
        let board = Board::from_poles(vec![vec![], vec![3, 2, 1], vec![]], 3).unwrap();
        assert!(!is_solved(&board, Pole::Right));
        assert!(is_solved(&board, Pole::Middle));
    }

    #[test]
    fn test_progress_partial() {
        let board = Board::from_poles(vec![vec![1], vec![], vec![4, 3, 2]], 4).unwrap();
        assert_eq!(progress(&board, Pole::Right), 75.0);
    }

    #[test]
    fn test_min_moves() {
        assert_eq!(min_moves(0), 0);
        assert_eq!(min_moves(3), 7);
        assert_eq!(min_moves(8), 255);
        assert_eq!(min_moves(20), 1_048_575);
    }

    #[test]
    fn test_min_moves_saturates_past_u64() {
        assert_eq!(min_moves(63), (1u64 << 63) - 1);
        assert_eq!(min_moves(64), u64::MAX);
        assert_eq!(min_moves(u8::MAX), u64::MAX);
    }
}
