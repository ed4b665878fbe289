//! MCP server exposing Towers of Hanoi sessions as tools.

use crate::api::{SessionMakeMoveRequest, SessionNewGameRequest, SessionRequest};
use crate::service::{GameService, ServiceError};
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo};
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use strictly_hanoi::{Board, Disk};
use tracing::{debug, info, instrument, warn};

fn to_mcp(err: ServiceError) -> McpError {
    warn!(kind = err.kind(), error = %err, "Tool call rejected");
    McpError::invalid_params(err.to_string(), None)
}

/// Renders poles taken from a service response, or an empty string if they
/// do not form a valid board.
fn render(poles: &[Vec<Disk>]) -> String {
    let disks = poles.iter().map(Vec::len).sum::<usize>();
    u8::try_from(disks)
        .ok()
        .and_then(|disks| Board::from_poles(poles.to_vec(), disks).ok())
        .map(|board| board.display())
        .unwrap_or_default()
}

fn text(message: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(message)])
}

/// Main server handler.
pub struct HanoiServer {
    service: GameService,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl HanoiServer {
    /// Creates a server over an existing game service.
    #[instrument(skip(service))]
    pub fn with_service(service: GameService) -> Self {
        info!("Creating Hanoi MCP server");
        Self {
            service,
            tool_router: Self::tool_router(),
        }
    }

    /// Creates a server with default settings.
    pub fn new() -> Self {
        Self::with_service(GameService::default())
    }

    /// Starts a new game in a session.
    #[instrument(skip(self, req), fields(session_id = %req.session_id))]
    #[tool(
        description = "Start a new Towers of Hanoi game in the session, replacing any game in progress. All disks start on pole 0."
    )]
    pub async fn new_game(
        &self,
        Parameters(req): Parameters<SessionNewGameRequest>,
    ) -> Result<CallToolResult, McpError> {
        let state = self
            .service
            .new_game(&req.session_id, req.disks)
            .map_err(to_mcp)?;

        Ok(text(format!(
            "New game with {} disks. Move every disk to pole {} in as few as {} moves.\n\n{}",
            state.num_disks,
            state.target_pole,
            state.min_moves,
            render(&state.poles)
        )))
    }

    /// Moves the top disk between poles.
    #[instrument(skip(self, req), fields(session_id = %req.session_id, from = req.from_pole, to = req.to_pole))]
    #[tool(
        description = "Move the top disk from one pole to another (poles 0-2). A larger disk may never go on a smaller one."
    )]
    pub async fn make_move(
        &self,
        Parameters(req): Parameters<SessionMakeMoveRequest>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .service
            .make_move(&req.session_id, req.from_pole, req.to_pole)
            .map_err(to_mcp)?;

        let status = match (&response.reason, response.is_solved) {
            (Some(reason), _) => format!("Move rejected: {}", reason),
            (None, true) => "Solved!".to_string(),
            (None, false) => "Move accepted.".to_string(),
        };

        Ok(text(format!(
            "{}\nMoves: {}\n\n{}",
            status,
            response.moves.unwrap_or_default(),
            render(&response.poles)
        )))
    }

    /// Shows the board.
    #[instrument(skip(self, req), fields(session_id = %req.session_id))]
    #[tool(description = "Get the current board, move count and legal moves")]
    pub async fn get_board(
        &self,
        Parameters(req): Parameters<SessionRequest>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Getting board state");
        let state = self.service.board(&req.session_id).map_err(to_mcp)?;

        let legal: Vec<String> = state
            .legal_moves
            .iter()
            .map(|[from, to]| format!("{}->{}", from, to))
            .collect();

        Ok(text(format!(
            "Session: {}\nDisks: {}\nMoves: {} (minimum {})\nSolved: {}\nProgress: {:.0}%\nLegal moves: {}\n\n{}",
            state.session_id,
            state.num_disks,
            state.moves,
            state.min_moves,
            state.is_solved,
            state.progress,
            legal.join(", "),
            render(&state.poles)
        )))
    }

    /// Suggests the next move.
    #[instrument(skip(self, req), fields(session_id = %req.session_id))]
    #[tool(description = "Suggest the next move of an optimal solution from the current board")]
    pub async fn hint(
        &self,
        Parameters(req): Parameters<SessionRequest>,
    ) -> Result<CallToolResult, McpError> {
        let hint = self.service.hint(&req.session_id).map_err(to_mcp)?;

        let message = match hint.next {
            Some([from, to]) => format!("Move the top disk from pole {} to pole {}.", from, to),
            None => "The puzzle is already solved.".to_string(),
        };
        Ok(text(message))
    }

    /// Lists the optimal remaining moves.
    #[instrument(skip(self, req), fields(session_id = %req.session_id))]
    #[tool(description = "List the optimal remaining moves from the current board without playing them")]
    pub async fn solve(
        &self,
        Parameters(req): Parameters<SessionRequest>,
    ) -> Result<CallToolResult, McpError> {
        let solution = self.service.solve(&req.session_id).map_err(to_mcp)?.solution;

        if solution.is_empty() {
            return Ok(text("The puzzle is already solved.".to_string()));
        }

        let mut message = format!("{} moves remaining:\n", solution.len());
        for (i, [from, to]) in solution.iter().enumerate() {
            message.push_str(&format!("{:>4}. {} -> {}\n", i + 1, from, to));
        }
        Ok(text(message))
    }

    /// Plays the hinted move.
    #[instrument(skip(self, req), fields(session_id = %req.session_id))]
    #[tool(description = "Play the next optimal move for the player")]
    pub async fn step(
        &self,
        Parameters(req): Parameters<SessionRequest>,
    ) -> Result<CallToolResult, McpError> {
        let response = self.service.step(&req.session_id).map_err(to_mcp)?;
        let status = if response.is_solved {
            "Solved!"
        } else {
            "Played the hinted move."
        };

        Ok(text(format!(
            "{}\nMoves: {}\n\n{}",
            status,
            response.moves.unwrap_or_default(),
            render(&response.poles)
        )))
    }

    /// Lists all sessions.
    #[instrument(skip(self))]
    #[tool(description = "List all game sessions with their progress")]
    pub async fn list_sessions(&self) -> Result<CallToolResult, McpError> {
        let sessions = self.service.list_sessions();

        if sessions.is_empty() {
            return Ok(text("No active game sessions".to_string()));
        }

        let mut result = String::from("Game sessions:\n\n");
        for summary in &sessions {
            result.push_str(&format!(
                "Session: {}\n  Disks: {}\n  Moves: {}\n  Status: {}\n",
                summary.session_id,
                summary.num_disks,
                summary.moves,
                if summary.is_solved { "solved" } else { "in progress" }
            ));
        }

        info!(session_count = sessions.len(), "Listed sessions");
        Ok(text(result))
    }
}

impl Default for HanoiServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for HanoiServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build()).with_instructions(
            "Towers of Hanoi. Start with new_game, then move disks from pole 0 to the target pole.",
        )
    }
}
