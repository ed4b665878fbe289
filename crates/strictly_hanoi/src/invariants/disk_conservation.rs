//! Disk conservation: every disk `1..=N` appears exactly once.

use super::super::Board;
use super::Invariant;

/// Invariant: the union of all poles is `{1..=N}` with no duplicates.
pub struct DiskConservationInvariant;

impl Invariant<Board> for DiskConservationInvariant {
    fn holds(board: &Board) -> bool {
        let n = usize::from(board.disk_count());
        let mut seen = vec![false; n];

        for &disk in board.poles().iter().flatten() {
            let Some(slot) = usize::from(disk).checked_sub(1).and_then(|i| seen.get_mut(i)) else {
                return false;
            };
            if *slot {
                return false;
            }
            *slot = true;
        }

        seen.into_iter().all(|present| present)
    }

    fn description() -> &'static str {
        "Every disk from 1 to N appears exactly once"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_holds() {
        let board = Board::new(6).unwrap();
        assert!(DiskConservationInvariant::holds(&board));
    }

    #[test]
    fn test_missing_disk_violates() {
        let mut board = Board::new(3).unwrap();
        board.poles[0].pop();
        assert!(!DiskConservationInvariant::holds(&board));
    }

    #[test]
    fn test_duplicate_disk_violates() {
        let mut board = Board::new(3).unwrap();
        board.poles[2].push(3);
        assert!(!DiskConservationInvariant::holds(&board));
    }

    #[test]
    fn test_zero_disk_violates() {
        let mut board = Board::new(1).unwrap();
        board.poles = [vec![0], vec![], vec![]];
        assert!(!DiskConservationInvariant::holds(&board));
    }
}
