//! Optimal solutions and hints.
//!
//! [`solve`] yields the canonical tower transfer lazily from an explicit
//! stack. [`solve_from`] plans from any valid board: working down from the
//! largest disk, each disk gets a goal pole. A disk already on its goal passes
//! the same goal to the next smaller disk; otherwise the smaller disks must
//! first gather on the spare pole. Moves are then emitted from the smallest
//! misplaced disk upward, each followed by a canonical transfer of the
//! smaller tower onto it. [`hint`] is the first move of that plan.

use super::rules::min_moves;
use super::{Board, Disk, Move, Pole};
use tracing::{debug, instrument};

/// A unit of pending work on the solver stack.
#[derive(Debug, Clone)]
enum Frame {
    /// Move a tower of `disks` from `from` to `to` using `via`.
    Transfer {
        disks: u8,
        from: Pole,
        to: Pole,
        via: Pole,
    },
    /// Emit a single move.
    Single(Move),
}

/// Lazy, restartable sequence of moves for a tower transfer.
///
/// Yields exactly `2^n - 1` moves. The reported length saturates at
/// `u64::MAX` for towers of 64 disks or more.
#[derive(Debug, Clone)]
pub struct Solution {
    stack: Vec<Frame>,
    remaining: u64,
}

impl Solution {
    /// Transfer of the tower `1..=disks` from `from` to `to`.
    ///
    /// `from` and `to` must differ; a tower of zero disks yields nothing.
    pub fn transfer(disks: u8, from: Pole, to: Pole) -> Self {
        let stack = if disks == 0 || from == to {
            Vec::new()
        } else {
            vec![Frame::Transfer {
                disks,
                from,
                to,
                via: Pole::spare(from, to),
            }]
        };
        let remaining = if stack.is_empty() { 0 } else { min_moves(disks) };
        Self { stack, remaining }
    }
}

impl Iterator for Solution {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        while let Some(frame) = self.stack.pop() {
            match frame {
                Frame::Single(mv) => {
                    self.remaining = self.remaining.saturating_sub(1);
                    return Some(mv);
                }
                Frame::Transfer {
                    disks,
                    from,
                    to,
                    via,
                } => {
                    // Pushed in reverse of execution order
                    if disks > 1 {
                        self.stack.push(Frame::Transfer {
                            disks: disks - 1,
                            from: via,
                            to,
                            via: from,
                        });
                    }
                    if let Ok(mv) = Move::new(from, to) {
                        self.stack.push(Frame::Single(mv));
                    }
                    if disks > 1 {
                        self.stack.push(Frame::Transfer {
                            disks: disks - 1,
                            from,
                            to: via,
                            via: to,
                        });
                    }
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Solution {}

impl std::iter::FusedIterator for Solution {}

/// Canonical solution: the whole tower from the left pole to the right pole.
#[instrument]
pub fn solve(disks: u8) -> Solution {
    Solution::transfer(disks, Pole::Left, Pole::Right)
}

/// Goal pole for each disk, indexed by `disk - 1`.
fn goals(board: &Board, target: Pole) -> Vec<(Disk, Pole, Pole)> {
    let mut goal = target;
    let mut plan = Vec::with_capacity(usize::from(board.disk_count()));

    for disk in (1..=board.disk_count()).rev() {
        let Some(at) = board.location(disk) else {
            continue;
        };
        plan.push((disk, at, goal));
        if at != goal {
            goal = Pole::spare(at, goal);
        }
    }

    plan.reverse();
    plan
}

/// Optimal move sequence from any valid board to all disks on `target`.
///
/// On the canonical start board with the right pole as target this equals
/// [`solve`].
#[instrument(skip(board), fields(disks = board.disk_count()))]
pub fn solve_from(board: &Board, target: Pole) -> Vec<Move> {
    let plan = goals(board, target);
    let mut moves = Vec::new();

    for (index, &(disk, at, goal)) in plan.iter().enumerate() {
        if at == goal {
            continue;
        }
        if let Ok(mv) = Move::new(at, goal) {
            moves.push(mv);
        }
        // Smaller disks are gathered on the spare pole at this point
        let gathered = index
            .checked_sub(1)
            .map(|smaller| plan[smaller].2)
            .unwrap_or(goal);
        moves.extend(Solution::transfer(disk - 1, gathered, goal));
    }

    debug!(moves = moves.len(), "Planned solution from current board");
    moves
}

/// Next move of an optimal plan from the actual board, or `None` if solved.
#[instrument(skip(board), fields(disks = board.disk_count()))]
pub fn hint(board: &Board, target: Pole) -> Option<Move> {
    let hint = goals(board, target)
        .into_iter()
        .find(|&(_, at, goal)| at != goal)
        .and_then(|(_, at, goal)| Move::new(at, goal).ok());
    debug!(?hint, "Computed hint");
    hint
}
