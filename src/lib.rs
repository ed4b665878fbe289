//! Strictly Hanoi - Towers of Hanoi as a service
//!
//! Game rules live in the `strictly_hanoi` crate. This crate puts them
//! behind a session-aware service with two front ends.
//!
//! # Architecture
//!
//! - **Service**: session and stateless game operations
//! - **Session**: caller-keyed games behind a shared map
//! - **HTTP**: JSON REST API (axum)
//! - **Server**: MCP tools over stdio (rmcp)
//! - **Config**: TOML game and server settings
//!
//! # Example
//!
//! ```
//! use strictly_hanoi_server::GameService;
//!
//! let service = GameService::default();
//! service.new_game("alice", Some(3)).unwrap();
//! let hint = service.hint("alice").unwrap();
//! assert_eq!(hint.next, Some([0, 2]));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod api;
mod config;
mod http;
mod server;
mod service;
mod session;

// Crate-level exports - Wire types
pub use api::{
    BoardRequest, ErrorResponse, HintResponse, MovePair, MoveRequest, MoveResponse,
    NewGameRequest, NewGameResponse, SessionMakeMoveRequest, SessionMoveRequest,
    SessionNewGameRequest, SessionRequest, SessionState, SessionSummary, SolveResponse,
    move_pairs,
};

// Crate-level exports - Configuration
pub use config::{GameSettings, HanoiConfig, ServerSettings};

// Crate-level exports - Transports
pub use http::router;
pub use server::HanoiServer;

// Crate-level exports - Service and sessions
pub use service::{GameService, ServiceError};
pub use session::{GameSession, SessionId, SessionManager};
