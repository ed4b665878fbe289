//! REST interface over [`GameService`].
//!
//! The stateless endpoints keep the board on the client and echo it back
//! after every call. The `/sessions` endpoints keep it on the server.

use crate::api::{
    BoardRequest, ErrorResponse, HintResponse, MoveRequest, MoveResponse, NewGameRequest,
    NewGameResponse, SessionMoveRequest, SessionState, SessionSummary, SolveResponse,
};
use crate::service::{GameService, ServiceError};
use axum::{
    Json, Router,
    body::{Body, Bytes},
    extract::{FromRequest, Path, State, rejection::JsonRejection},
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::de::DeserializeOwned;
use strictly_hanoi::{ConfigError, HanoiError};
use tower::ServiceBuilder;
use tracing::{debug, info, instrument, warn};

type ApiResult<T> = Result<Json<T>, ServiceError>;

impl ServiceError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::Game(HanoiError::InvalidConfig(_)) => StatusCode::BAD_REQUEST,
            // Rejected moves are reported in the body; IllegalMove only surfaces
            // if a hinted move is refused.
            ServiceError::Game(HanoiError::IllegalMove(_) | HanoiError::NoHint) => {
                StatusCode::CONFLICT
            }
            ServiceError::SessionNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(status = %status, kind = self.kind(), error = %self, "Request rejected");
        let body = ErrorResponse::new(self.to_string(), self.kind().to_string());
        (status, Json(body)).into_response()
    }
}

/// Request body that could not be read as the expected JSON.
fn invalid_body(detail: impl std::fmt::Display) -> ServiceError {
    ConfigError::new(format!("Invalid request body: {}", detail)).into()
}

impl From<JsonRejection> for ServiceError {
    fn from(rejection: JsonRejection) -> Self {
        invalid_body(rejection.body_text())
    }
}

/// JSON body whose rejections answer with the standard error body.
struct ApiJson<T>(T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

/// Parses an optional JSON body; empty means default.
fn optional_body<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T, ServiceError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(invalid_body)
}

/// Builds the REST router.
#[instrument(skip(service))]
pub fn router(service: GameService) -> Router {
    info!("Building REST router");
    Router::new()
        .route("/health", get(health))
        .route("/new_game", post(new_game))
        .route("/move", post(evaluate_move))
        .route("/hint", post(evaluate_hint))
        .route("/solve", post(evaluate_solve))
        .route("/sessions", get(list_sessions))
        .route(
            "/sessions/{id}",
            post(start_session).get(session_board).delete(end_session),
        )
        .route("/sessions/{id}/move", post(session_move))
        .route("/sessions/{id}/hint", get(session_hint))
        .route("/sessions/{id}/solve", get(session_solve))
        .route("/sessions/{id}/step", post(session_step))
        .layer(ServiceBuilder::new().map_request(|req: Request<Body>| {
            debug!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
            req
        }))
        .with_state(service)
}

async fn health() -> &'static str {
    "ok"
}

// ─────────────────────────────────────────────────────────────
//  Stateless handlers
// ─────────────────────────────────────────────────────────────

async fn new_game(
    State(service): State<GameService>,
    ApiJson(req): ApiJson<NewGameRequest>,
) -> ApiResult<NewGameResponse> {
    service.create_board(req.disks).map(Json)
}

async fn evaluate_move(
    State(service): State<GameService>,
    ApiJson(req): ApiJson<MoveRequest>,
) -> ApiResult<MoveResponse> {
    service
        .evaluate_move(req.poles, req.num_disks, req.from_pole, req.to_pole)
        .map(Json)
}

async fn evaluate_hint(
    State(service): State<GameService>,
    ApiJson(req): ApiJson<BoardRequest>,
) -> ApiResult<HintResponse> {
    service.evaluate_hint(req.poles, req.num_disks).map(Json)
}

async fn evaluate_solve(
    State(service): State<GameService>,
    ApiJson(req): ApiJson<BoardRequest>,
) -> ApiResult<SolveResponse> {
    service.evaluate_solve(req.poles, req.num_disks).map(Json)
}

// ─────────────────────────────────────────────────────────────
//  Session handlers
// ─────────────────────────────────────────────────────────────

async fn list_sessions(State(service): State<GameService>) -> Json<Vec<SessionSummary>> {
    Json(service.list_sessions())
}

/// Body is optional; an empty request uses the default disk count.
async fn start_session(
    State(service): State<GameService>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<SessionState> {
    let req: NewGameRequest = optional_body(&body)?;
    service.new_game(&id, req.disks).map(Json)
}

async fn session_board(
    State(service): State<GameService>,
    Path(id): Path<String>,
) -> ApiResult<SessionState> {
    service.board(&id).map(Json)
}

async fn end_session(
    State(service): State<GameService>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServiceError> {
    service.end_session(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn session_move(
    State(service): State<GameService>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<SessionMoveRequest>,
) -> ApiResult<MoveResponse> {
    service.make_move(&id, req.from_pole, req.to_pole).map(Json)
}

async fn session_hint(
    State(service): State<GameService>,
    Path(id): Path<String>,
) -> ApiResult<HintResponse> {
    service.hint(&id).map(Json)
}

async fn session_solve(
    State(service): State<GameService>,
    Path(id): Path<String>,
) -> ApiResult<SolveResponse> {
    service.solve(&id).map(Json)
}

async fn session_step(
    State(service): State<GameService>,
    Path(id): Path<String>,
) -> ApiResult<MoveResponse> {
    service.step(&id).map(Json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_hanoi::{MoveError, Pole};

    #[test]
    fn test_error_status_mapping() {
        let invalid = ServiceError::from(ConfigError::new("bad"));
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let illegal =
            ServiceError::Game(HanoiError::IllegalMove(MoveError::EmptySource(Pole::Middle)));
        assert_eq!(illegal.status(), StatusCode::CONFLICT);

        assert_eq!(ServiceError::Game(HanoiError::NoHint).status(), StatusCode::CONFLICT);
        assert_eq!(
            ServiceError::SessionNotFound("x".to_string()).status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_optional_body() {
        let empty: NewGameRequest = optional_body(&Bytes::new()).unwrap();
        assert_eq!(empty.disks, None);

        let given: NewGameRequest = optional_body(&Bytes::from_static(b"{\"disks\": 4}")).unwrap();
        assert_eq!(given.disks, Some(4));

        let err = optional_body::<NewGameRequest>(&Bytes::from_static(b"{\"disks\": \"x\""))
            .unwrap_err();
        assert_eq!(err.kind(), "invalid_config");
    }
}
