//! Game service: the operations behind every interface.
//!
//! Session operations work against a [`SessionManager`] keyed by caller-owned
//! IDs. Stateless operations take the board from the caller, mirroring the
//! browser contract where the client holds the poles.

use crate::api::{
    HintResponse, MoveResponse, NewGameResponse, SessionState, SessionSummary, SolveResponse,
    move_pairs,
};
use crate::config::GameSettings;
use crate::session::{GameSession, SessionManager};
use derive_more::Display;
use strictly_hanoi::rules::{self, min_moves};
use strictly_hanoi::{Board, ConfigError, Disk, Game, HanoiError, Move, MoveError, solver};
use tracing::{debug, info, instrument, warn};

/// Error returned by service operations.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum ServiceError {
    /// A game rule or configuration error.
    #[display("{}", _0)]
    Game(HanoiError),

    /// No session with this ID.
    #[display("Session not found: {}", _0)]
    SessionNotFound(String),
}

impl ServiceError {
    /// Machine-readable category.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::Game(HanoiError::InvalidConfig(_)) => "invalid_config",
            ServiceError::Game(HanoiError::IllegalMove(_)) => "illegal_move",
            ServiceError::Game(HanoiError::NoHint) => "no_hint",
            ServiceError::SessionNotFound(_) => "session_not_found",
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServiceError::Game(e) => Some(e),
            ServiceError::SessionNotFound(_) => None,
        }
    }
}

impl From<HanoiError> for ServiceError {
    fn from(err: HanoiError) -> Self {
        ServiceError::Game(err)
    }
}

impl From<ConfigError> for ServiceError {
    fn from(err: ConfigError) -> Self {
        ServiceError::Game(HanoiError::InvalidConfig(err))
    }
}

/// Orchestrates games for all interfaces.
#[derive(Debug, Clone, Default)]
pub struct GameService {
    sessions: SessionManager,
    settings: GameSettings,
}

impl GameService {
    /// Creates a service with its own session store.
    #[instrument]
    pub fn new(settings: GameSettings) -> Self {
        Self::with_sessions(settings, SessionManager::new())
    }

    /// Creates a service over a shared session store.
    #[instrument(skip(sessions))]
    pub fn with_sessions(settings: GameSettings, sessions: SessionManager) -> Self {
        info!("Creating game service");
        Self { sessions, settings }
    }

    /// Game rules in force.
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    // ─────────────────────────────────────────────────────────
    //  Session operations
    // ─────────────────────────────────────────────────────────

    /// Starts a new game, replacing the session's previous game.
    ///
    /// An invalid disk count leaves any previous game untouched.
    #[instrument(skip(self))]
    pub fn new_game(
        &self,
        session_id: &str,
        disks: Option<i64>,
    ) -> Result<SessionState, ServiceError> {
        let disks = self.settings.disk_count(disks).map_err(|e| {
            warn!(session_id, error = %e, "Rejected new game");
            e
        })?;

        let game = Game::new(disks, *self.settings.target_pole())?
            .with_history_limit(*self.settings.history_limit());
        let session = GameSession::new(session_id.to_string(), game);
        let state = session_state(&session);
        self.sessions.replace_session(session);

        info!(session_id, disks, "New game started");
        Ok(state)
    }

    /// Current state of a session.
    #[instrument(skip(self))]
    pub fn board(&self, session_id: &str) -> Result<SessionState, ServiceError> {
        self.sessions
            .get_session(session_id)
            .map(|session| session_state(&session))
            .ok_or_else(|| ServiceError::SessionNotFound(session_id.to_string()))
    }

    /// Attempts a move. Illegal moves come back rejected, not as errors.
    #[instrument(skip(self))]
    pub fn make_move(
        &self,
        session_id: &str,
        from: usize,
        to: usize,
    ) -> Result<MoveResponse, ServiceError> {
        self.sessions
            .with_session(session_id, |session| {
                let result = Move::from_indices(from, to).and_then(|mv| session.make_move(mv));
                move_response(&session.game, result.err(), Some(session.game.moves()))
            })
            .ok_or_else(|| ServiceError::SessionNotFound(session_id.to_string()))
    }

    /// Next move toward the target, or none when solved.
    #[instrument(skip(self))]
    pub fn hint(&self, session_id: &str) -> Result<HintResponse, ServiceError> {
        let session = self
            .sessions
            .get_session(session_id)
            .ok_or_else(|| ServiceError::SessionNotFound(session_id.to_string()))?;

        Ok(HintResponse {
            next: session.game.hint().map(|mv| mv.to_indices()),
        })
    }

    /// Optimal remaining moves from the session's board. Does not mutate.
    #[instrument(skip(self))]
    pub fn solve(&self, session_id: &str) -> Result<SolveResponse, ServiceError> {
        let session = self
            .sessions
            .get_session(session_id)
            .ok_or_else(|| ServiceError::SessionNotFound(session_id.to_string()))?;

        let solution = session.game.solution();
        debug!(moves = solution.len(), "Solved session board");
        Ok(SolveResponse {
            solution: move_pairs(&solution),
        })
    }

    /// Applies the hinted move. Fails with `NoHint` once solved.
    #[instrument(skip(self))]
    pub fn step(&self, session_id: &str) -> Result<MoveResponse, ServiceError> {
        self.sessions
            .with_session(session_id, |session| -> Result<MoveResponse, ServiceError> {
                session.step()?;
                Ok(move_response(&session.game, None, Some(session.game.moves())))
            })
            .unwrap_or_else(|| Err(ServiceError::SessionNotFound(session_id.to_string())))
    }

    /// Summaries of all sessions.
    #[instrument(skip(self))]
    pub fn list_sessions(&self) -> Vec<SessionSummary> {
        self.sessions
            .list_sessions()
            .into_iter()
            .filter_map(|id| self.sessions.get_session(&id))
            .map(|session| {
                SessionSummary::new(
                    session.id,
                    session.game.board().disk_count(),
                    session.game.moves(),
                    session.game.is_solved(),
                )
            })
            .collect()
    }

    /// Discards a session.
    #[instrument(skip(self))]
    pub fn end_session(&self, session_id: &str) -> Result<(), ServiceError> {
        self.sessions
            .remove_session(session_id)
            .map(|_| ())
            .ok_or_else(|| ServiceError::SessionNotFound(session_id.to_string()))
    }

    // ─────────────────────────────────────────────────────────
    //  Stateless operations
    // ─────────────────────────────────────────────────────────

    /// Creates a canonical start board.
    #[instrument(skip(self))]
    pub fn create_board(&self, disks: Option<i64>) -> Result<NewGameResponse, ServiceError> {
        let disks = self.settings.disk_count(disks)?;
        let board = Board::new(disks)?;
        Ok(NewGameResponse {
            poles: board.to_vecs(),
            num_disks: disks,
        })
    }

    /// Attempts a move on a caller-supplied board.
    #[instrument(skip(self, poles))]
    pub fn evaluate_move(
        &self,
        poles: Vec<Vec<Disk>>,
        num_disks: i64,
        from: usize,
        to: usize,
    ) -> Result<MoveResponse, ServiceError> {
        let board = self.parse_board(poles, num_disks)?;
        let mut game = Game::from_board(board, *self.settings.target_pole());
        let result = Move::from_indices(from, to).and_then(|mv| game.make_move(mv));
        Ok(move_response(&game, result.err(), None))
    }

    /// Next move for a caller-supplied board.
    #[instrument(skip(self, poles))]
    pub fn evaluate_hint(
        &self,
        poles: Vec<Vec<Disk>>,
        num_disks: i64,
    ) -> Result<HintResponse, ServiceError> {
        let board = self.parse_board(poles, num_disks)?;
        Ok(HintResponse {
            next: solver::hint(&board, *self.settings.target_pole()).map(|mv| mv.to_indices()),
        })
    }

    /// Optimal moves for a caller-supplied board.
    #[instrument(skip(self, poles))]
    pub fn evaluate_solve(
        &self,
        poles: Vec<Vec<Disk>>,
        num_disks: i64,
    ) -> Result<SolveResponse, ServiceError> {
        let board = self.parse_board(poles, num_disks)?;
        let solution = solver::solve_from(&board, *self.settings.target_pole());
        Ok(SolveResponse {
            solution: move_pairs(&solution),
        })
    }

    /// Validates an untrusted board against the configured limits.
    fn parse_board(&self, poles: Vec<Vec<Disk>>, num_disks: i64) -> Result<Board, ServiceError> {
        let disks = self.settings.disk_count(Some(num_disks))?;
        Ok(Board::from_poles(poles, disks)?)
    }
}

fn move_response(game: &Game, rejection: Option<MoveError>, moves: Option<u64>) -> MoveResponse {
    MoveResponse {
        success: rejection.is_none(),
        poles: game.board().to_vecs(),
        is_solved: game.is_solved(),
        moves,
        reason: rejection.map(|e| e.to_string()),
    }
}

fn session_state(session: &GameSession) -> SessionState {
    let game = &session.game;
    SessionState {
        session_id: session.id.clone(),
        poles: game.board().to_vecs(),
        num_disks: game.board().disk_count(),
        moves: game.moves(),
        min_moves: min_moves(game.board().disk_count()),
        is_solved: game.is_solved(),
        progress: game.progress(),
        target_pole: game.target().index(),
        legal_moves: move_pairs(&rules::legal_moves(game.board())),
        history: move_pairs(game.history()),
        created_at: session.created_at,
        updated_at: session.updated_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let err: ServiceError = ConfigError::new("bad").into();
        assert_eq!(err.kind(), "invalid_config");
        assert_eq!(ServiceError::from(HanoiError::NoHint).kind(), "no_hint");
        assert_eq!(
            ServiceError::SessionNotFound("x".to_string()).kind(),
            "session_not_found"
        );
    }

    #[test]
    fn test_rejected_move_reports_reason() {
        let service = GameService::default();
        service.new_game("s", Some(3)).unwrap();
        let response = service.make_move("s", 2, 0).unwrap();
        assert!(!response.success);
        assert_eq!(response.reason.as_deref(), Some("The right pole is empty"));
        assert_eq!(response.moves, Some(0));
    }
}
