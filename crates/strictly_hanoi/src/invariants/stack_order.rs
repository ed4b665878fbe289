//! Stack order: no disk rests on a smaller one.

use super::super::Board;
use super::Invariant;

/// Invariant: within each pole, sizes strictly decrease from bottom to top.
pub struct StackOrderInvariant;

impl Invariant<Board> for StackOrderInvariant {
    fn holds(board: &Board) -> bool {
        board
            .poles()
            .iter()
            .all(|pole| pole.windows(2).all(|pair| pair[0] > pair[1]))
    }

    fn description() -> &'static str {
        "Disks strictly decrease in size from bottom to top on every pole"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_holds() {
        let board = Board::new(4).unwrap();
        assert!(StackOrderInvariant::holds(&board));
    }

    #[test]
    fn test_larger_on_smaller_violates() {
        let mut board = Board::new(3).unwrap();
        board.poles = [vec![3, 1, 2], vec![], vec![]];
        assert!(!StackOrderInvariant::holds(&board));
    }

    #[test]
    fn test_equal_sizes_violate() {
        let mut board = Board::new(2).unwrap();
        board.poles = [vec![2, 2], vec![], vec![]];
        assert!(!StackOrderInvariant::holds(&board));
    }
}
