//! Disk count bounds.

use super::super::{Board, MAX_DISKS};
use super::Invariant;

/// Invariant: the board holds between 1 and [`MAX_DISKS`] disks.
pub struct DiskCountInvariant;

impl Invariant<Board> for DiskCountInvariant {
    fn holds(board: &Board) -> bool {
        (1..=MAX_DISKS).contains(&board.disk_count())
    }

    fn description() -> &'static str {
        "Disk count is within the supported range"
    }
}
