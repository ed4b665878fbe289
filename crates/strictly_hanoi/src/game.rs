//! A single puzzle in play.

use super::rules::{self, is_solved};
use super::solver;
use super::{Board, ConfigError, HanoiError, Move, MoveError, Pole};
use serde::Serialize;
use std::collections::VecDeque;
use tracing::{debug, info, instrument, warn};

/// Default number of accepted moves kept in the history.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Current status of the puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Disks remain off the target pole.
    #[display("in progress")]
    InProgress,
    /// Every disk is on the target pole.
    #[display("solved")]
    Solved,
}

/// Towers of Hanoi game engine.
///
/// Owns the board, the move counter and a bounded history of accepted moves.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    target: Pole,
    moves: u64,
    history: VecDeque<Move>,
    history_limit: usize,
}

impl Game {
    /// Starts a new game on the canonical board.
    #[instrument]
    pub fn new(disk_count: u8, target: Pole) -> Result<Self, ConfigError> {
        Ok(Self::from_board(Board::new(disk_count)?, target))
    }

    /// Resumes a game from an existing board.
    #[instrument(skip(board), fields(disks = board.disk_count()))]
    pub fn from_board(board: Board, target: Pole) -> Self {
        Self {
            board,
            target,
            moves: 0,
            history: VecDeque::new(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Sets how many accepted moves the history keeps (at least one).
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit.max(1);
        while self.history.len() > self.history_limit {
            self.history.pop_front();
        }
        self
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the target pole.
    pub fn target(&self) -> Pole {
        self.target
    }

    /// Number of accepted moves.
    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// Most recent accepted moves, oldest first.
    pub fn history(&self) -> impl ExactSizeIterator<Item = &Move> {
        self.history.iter()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        if self.is_solved() {
            GameStatus::Solved
        } else {
            GameStatus::InProgress
        }
    }

    /// Whether every disk is on the target pole.
    pub fn is_solved(&self) -> bool {
        is_solved(&self.board, self.target)
    }

    /// Percentage of disks on the target pole.
    pub fn progress(&self) -> f64 {
        rules::progress(&self.board, self.target)
    }

    /// Every legal move from the current board.
    pub fn legal_moves(&self) -> Vec<Move> {
        rules::legal_moves(&self.board)
    }

    /// Makes a move. Illegal moves leave the game unchanged.
    #[instrument(skip(self), fields(moves = self.moves))]
    pub fn make_move(&mut self, mv: Move) -> Result<GameStatus, MoveError> {
        self.board.apply_move(mv).map_err(|e| {
            warn!(%mv, error = %e, "Rejected move");
            e
        })?;

        self.moves += 1;
        if self.history.len() == self.history_limit {
            self.history.pop_front();
        }
        self.history.push_back(mv);

        let status = self.status();
        info!(%mv, moves = self.moves, %status, "Move applied");
        Ok(status)
    }

    /// Next move toward the target, or `None` when solved.
    pub fn hint(&self) -> Option<Move> {
        solver::hint(&self.board, self.target)
    }

    /// Optimal remaining moves from the current board.
    pub fn solution(&self) -> Vec<Move> {
        solver::solve_from(&self.board, self.target)
    }

    /// Applies the hinted move.
    ///
    /// Fails with [`HanoiError::NoHint`] when the puzzle is already solved.
    #[instrument(skip(self))]
    pub fn step(&mut self) -> Result<Move, HanoiError> {
        let mv = self.hint().ok_or(HanoiError::NoHint)?;
        debug!(%mv, "Stepping along the optimal plan");
        self.make_move(mv)?;
        Ok(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_in_progress() {
        let game = Game::new(3, Pole::Right).unwrap();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.moves(), 0);
        assert_eq!(game.history().len(), 0);
    }

    #[test]
    fn test_rejected_move_not_counted() {
        let mut game = Game::new(3, Pole::Right).unwrap();
        assert!(game.make_move(Move::from_indices(1, 0).unwrap()).is_err());
        assert_eq!(game.moves(), 0);
        assert_eq!(game.board(), &Board::new(3).unwrap());
    }

    #[test]
    fn test_stepping_solves_in_minimum_moves() {
        let mut game = Game::new(4, Pole::Right).unwrap();
        while !game.is_solved() {
            game.step().unwrap();
        }
        assert_eq!(game.moves(), 15);
        assert_eq!(game.step(), Err(HanoiError::NoHint));
    }

    #[test]
    fn test_history_is_bounded() {
        let mut game = Game::new(5, Pole::Right).unwrap().with_history_limit(4);
        for _ in 0..10 {
            game.step().unwrap();
        }
        assert_eq!(game.moves(), 10);
        assert_eq!(game.history().len(), 4);
    }
}
