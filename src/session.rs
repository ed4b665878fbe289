//! Game session management.
//!
//! Sessions are keyed by identifiers owned by the caller. Every operation
//! locks the map once and runs to completion against a single session.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use strictly_hanoi::{Game, GameStatus, HanoiError, Move, MoveError};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// One player's puzzle.
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Session ID.
    pub id: SessionId,
    /// The game state.
    pub game: Game,
    /// When the current game was started.
    pub created_at: DateTime<Utc>,
    /// When the last move was accepted.
    pub updated_at: DateTime<Utc>,
}

impl GameSession {
    /// Creates a new game session.
    #[instrument(skip(game))]
    pub fn new(id: SessionId, game: Game) -> Self {
        info!(session_id = %id, disks = game.board().disk_count(), "Creating new game session");
        let now = Utc::now();
        Self {
            id,
            game,
            created_at: now,
            updated_at: now,
        }
    }

    /// Makes a move. A rejected move changes nothing.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn make_move(&mut self, mv: Move) -> Result<GameStatus, MoveError> {
        let status = self.game.make_move(mv)?;
        self.updated_at = Utc::now();
        Ok(status)
    }

    /// Applies the hinted move.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn step(&mut self) -> Result<Move, HanoiError> {
        let mv = self.game.step()?;
        self.updated_at = Utc::now();
        Ok(mv)
    }
}

/// Manages all game sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<SessionId, GameSession>>>,
}

impl SessionManager {
    /// Creates a new session manager.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating session manager");
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<SessionId, GameSession>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stores a session, replacing any previous one with the same ID.
    #[instrument(skip(self, session), fields(session_id = %session.id))]
    pub fn replace_session(&self, session: GameSession) -> Option<GameSession> {
        let previous = self.lock().insert(session.id.clone(), session);
        if previous.is_some() {
            debug!("Replaced existing session");
        }
        previous
    }

    /// Gets a snapshot of a session by ID.
    #[instrument(skip(self))]
    pub fn get_session(&self, id: &str) -> Option<GameSession> {
        let session = self.lock().get(id).cloned();

        if session.is_none() {
            debug!(session_id = id, "Session not found");
        }

        session
    }

    /// Runs `f` against a session while holding the lock.
    ///
    /// Returns `None` if the session does not exist.
    #[instrument(skip(self, f))]
    pub fn with_session<T>(&self, id: &str, f: impl FnOnce(&mut GameSession) -> T) -> Option<T> {
        let mut sessions = self.lock();
        match sessions.get_mut(id) {
            Some(session) => Some(f(session)),
            None => {
                warn!(session_id = id, "Session not found");
                None
            }
        }
    }

    /// Removes a session.
    #[instrument(skip(self))]
    pub fn remove_session(&self, id: &str) -> Option<GameSession> {
        let removed = self.lock().remove(id);
        if removed.is_some() {
            info!(session_id = id, "Session ended");
        }
        removed
    }

    /// Lists all active session IDs, sorted.
    #[instrument(skip(self))]
    pub fn list_sessions(&self) -> Vec<SessionId> {
        let mut ids: Vec<_> = self.lock().keys().cloned().collect();
        ids.sort();
        debug!(count = ids.len(), "Listed sessions");
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_hanoi::Pole;

    fn session(id: &str, disks: u8) -> GameSession {
        GameSession::new(id.to_string(), Game::new(disks, Pole::Right).unwrap())
    }

    #[test]
    fn test_replace_returns_previous() {
        let manager = SessionManager::new();
        assert!(manager.replace_session(session("a", 3)).is_none());
        let previous = manager.replace_session(session("a", 4)).unwrap();
        assert_eq!(previous.game.board().disk_count(), 3);
        assert_eq!(manager.get_session("a").unwrap().game.board().disk_count(), 4);
    }

    #[test]
    fn test_with_session_mutates_in_place() {
        let manager = SessionManager::new();
        manager.replace_session(session("a", 3));

        let status = manager
            .with_session("a", |s| s.make_move(Move::from_indices(0, 2).unwrap()))
            .unwrap()
            .unwrap();
        assert_eq!(status, GameStatus::InProgress);
        assert_eq!(manager.get_session("a").unwrap().game.moves(), 1);
        assert!(manager.with_session("missing", |_| ()).is_none());
    }

    #[test]
    fn test_clones_share_sessions() {
        let manager = SessionManager::new();
        let shared = manager.clone();
        manager.replace_session(session("b", 2));
        manager.replace_session(session("a", 2));
        assert_eq!(shared.list_sessions(), vec!["a".to_string(), "b".to_string()]);
        assert!(shared.remove_session("a").is_some());
        assert_eq!(manager.list_sessions(), vec!["b".to_string()]);
    }
}
