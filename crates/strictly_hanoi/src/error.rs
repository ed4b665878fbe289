//! Error taxonomy for Towers of Hanoi.

use super::types::{Disk, Pole};
use derive_more::{Display, Error};
use tracing::instrument;

/// Configuration error: bad disk count or malformed board.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Reason a proposed move was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveError {
    /// Source and destination are the same pole.
    #[display("Source and destination are both the {} pole", _0)]
    SamePole(Pole),

    /// A pole index outside 0-2.
    #[display("Pole index {} is out of range (must be 0-2)", _0)]
    UnknownPole(usize),

    /// Nothing to pick up.
    #[display("The {} pole is empty", _0)]
    EmptySource(Pole),

    /// The destination's top disk is smaller than the disk being moved.
    #[display("Disk {} cannot be placed on smaller disk {}", disk, onto)]
    LargerOnSmaller {
        /// Disk being moved.
        disk: Disk,
        /// Top disk of the destination pole.
        onto: Disk,
    },

    /// A postcondition failed after applying the move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Top-level error for game operations.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum HanoiError {
    /// Bad disk count or malformed board.
    #[display("{}", _0)]
    InvalidConfig(ConfigError),

    /// The legality check failed.
    #[display("Illegal move: {}", _0)]
    IllegalMove(MoveError),

    /// A hint was requested on a solved board.
    #[display("No hint available: the puzzle is already solved")]
    NoHint,
}

impl std::error::Error for HanoiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HanoiError::InvalidConfig(e) => Some(e),
            HanoiError::IllegalMove(e) => Some(e),
            HanoiError::NoHint => None,
        }
    }
}

impl From<ConfigError> for HanoiError {
    fn from(err: ConfigError) -> Self {
        HanoiError::InvalidConfig(err)
    }
}

impl From<MoveError> for HanoiError {
    fn from(err: MoveError) -> Self {
        HanoiError::IllegalMove(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_tracks_location() {
        let err = ConfigError::new("bad disk count");
        assert!(err.file.ends_with("error.rs"));
        assert!(err.to_string().contains("bad disk count"));
    }

    #[test]
    fn test_move_error_wraps_into_hanoi_error() {
        let err: HanoiError = MoveError::EmptySource(Pole::Middle).into();
        assert_eq!(err.to_string(), "Illegal move: The middle pole is empty");
    }
}
