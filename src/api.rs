//! Request and response types shared by the REST and MCP interfaces.
//!
//! Boards travel as `poles: [[3, 2, 1], [], []]` (bottom of each stack
//! first) with `num_disks`; moves travel as `[from, to]` pole indices.

use chrono::{DateTime, Utc};
use derive_new::new;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strictly_hanoi::{Disk, Move};

/// Wire form of a move: `[from, to]`.
pub type MovePair = [usize; 2];

/// Converts moves to their wire form.
pub fn move_pairs<'a>(moves: impl IntoIterator<Item = &'a Move>) -> Vec<MovePair> {
    moves.into_iter().map(Move::to_indices).collect()
}

// ─────────────────────────────────────────────────────────────
//  Stateless requests
// ─────────────────────────────────────────────────────────────

/// Request to start a new game.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct NewGameRequest {
    /// Number of disks. Uses the configured default when omitted.
    #[serde(default)]
    pub disks: Option<i64>,
}

/// A board supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BoardRequest {
    /// Pole contents, bottom of each stack first.
    pub poles: Vec<Vec<Disk>>,
    /// Total number of disks.
    pub num_disks: i64,
}

/// Request to move a disk on a caller-supplied board.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MoveRequest {
    /// Pole contents, bottom of each stack first.
    pub poles: Vec<Vec<Disk>>,
    /// Total number of disks.
    pub num_disks: i64,
    /// Source pole index (0-2).
    pub from_pole: usize,
    /// Destination pole index (0-2).
    pub to_pole: usize,
}

// ─────────────────────────────────────────────────────────────
//  Session requests
// ─────────────────────────────────────────────────────────────

/// Request to move a disk in a session.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SessionMoveRequest {
    /// Source pole index (0-2).
    pub from_pole: usize,
    /// Destination pole index (0-2).
    pub to_pole: usize,
}

/// Identifies a session.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SessionRequest {
    /// Session ID.
    pub session_id: String,
}

/// Starts a new game in a session.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SessionNewGameRequest {
    /// Session ID.
    pub session_id: String,
    /// Number of disks. Uses the configured default when omitted.
    #[serde(default)]
    pub disks: Option<i64>,
}

/// Moves a disk in a session.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SessionMakeMoveRequest {
    /// Session ID.
    pub session_id: String,
    /// Source pole index (0-2).
    pub from_pole: usize,
    /// Destination pole index (0-2).
    pub to_pole: usize,
}

// ─────────────────────────────────────────────────────────────
//  Responses
// ─────────────────────────────────────────────────────────────

/// A freshly created board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewGameResponse {
    /// Pole contents.
    pub poles: Vec<Vec<Disk>>,
    /// Total number of disks.
    pub num_disks: u8,
}

/// Outcome of a move attempt.
///
/// A rejected move is a normal response with `success = false` and the
/// board unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveResponse {
    /// Whether the move was accepted.
    pub success: bool,
    /// Board after the attempt.
    pub poles: Vec<Vec<Disk>>,
    /// Whether the puzzle is now solved.
    pub is_solved: bool,
    /// Accepted moves so far (session moves only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moves: Option<u64>,
    /// Why the move was rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Suggested next move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HintResponse {
    /// `[from, to]`, or `null` when already solved.
    #[serde(rename = "move")]
    pub next: Option<MovePair>,
}

/// Optimal remaining moves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResponse {
    /// Moves as `[from, to]` pairs.
    pub solution: Vec<MovePair>,
}

/// Full state of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Session ID.
    pub session_id: String,
    /// Pole contents.
    pub poles: Vec<Vec<Disk>>,
    /// Total number of disks.
    pub num_disks: u8,
    /// Accepted moves so far.
    pub moves: u64,
    /// Minimum moves for this disk count.
    pub min_moves: u64,
    /// Whether the puzzle is solved.
    pub is_solved: bool,
    /// Percentage of disks on the target pole.
    pub progress: f64,
    /// Pole that counts as solved.
    pub target_pole: usize,
    /// Every legal move from the current board.
    pub legal_moves: Vec<MovePair>,
    /// Most recent accepted moves, oldest first.
    pub history: Vec<MovePair>,
    /// When the game was started.
    pub created_at: DateTime<Utc>,
    /// When the last move was accepted.
    pub updated_at: DateTime<Utc>,
}

/// One line of the session listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, new)]
pub struct SessionSummary {
    /// Session ID.
    pub session_id: String,
    /// Total number of disks.
    pub num_disks: u8,
    /// Accepted moves so far.
    pub moves: u64,
    /// Whether the puzzle is solved.
    pub is_solved: bool,
}

/// Structured rejection body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, new)]
pub struct ErrorResponse {
    /// Human-readable message.
    pub error: String,
    /// Machine-readable category.
    pub kind: String,
}
