//! HTTP surface: axum routes, request/response shapes, and the mapping
//! from [`GameError`] to status codes.

use crate::error::GameError;
use crate::games::{Action, AnyGame, GameKind};
use crate::news::{NewsClient, NewsRequest, NewsResponse};
use crate::service::GameService;
use crate::session::SessionId;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The session service.
    pub service: GameService,
    /// The news proxy client.
    pub news: Arc<NewsClient>,
}

/// Builds the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/games/tictactoe/new", post(create_tictactoe))
        .route("/api/games/tictactoe/{game_id}/move", post(move_tictactoe))
        .route("/api/games/sudoku/new", post(create_sudoku))
        .route("/api/games/sudoku/{game_id}/move", post(move_sudoku))
        .route("/api/games/snakeladder/new", post(create_snakeladder))
        .route("/api/games/snakeladder/{game_id}/roll", post(roll_snakeladder))
        .route("/api/news", post(news))
        .with_state(state)
}

// ─────────────────────────────────────────────────────────────
//  Request / response shapes
// ─────────────────────────────────────────────────────────────

/// Response to a session-creating call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGameResponse {
    /// Opaque session identifier.
    #[serde(rename = "gameId")]
    pub game_id: SessionId,
    /// Initial state snapshot.
    pub state: AnyGame,
}

/// Response to a move or roll.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateResponse {
    /// The state after the move.
    pub state: AnyGame,
}

/// Tic-tac-toe move payload.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlaceMove {
    /// Board position, 0-8 in row-major order.
    pub position: usize,
}

/// Sudoku move payload.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FillMove {
    /// Cell row, 0-3.
    pub row: usize,
    /// Cell column, 0-3.
    pub col: usize,
    /// Digit 1-4, or 0 to clear.
    pub value: u8,
}

// ─────────────────────────────────────────────────────────────
//  Handlers
// ─────────────────────────────────────────────────────────────

async fn create_tictactoe(State(state): State<AppState>) -> Json<CreateGameResponse> {
    create(&state, GameKind::TicTacToe)
}

async fn create_sudoku(State(state): State<AppState>) -> Json<CreateGameResponse> {
    create(&state, GameKind::Sudoku)
}

async fn create_snakeladder(State(state): State<AppState>) -> Json<CreateGameResponse> {
    create(&state, GameKind::SnakesAndLadders)
}

fn create(state: &AppState, kind: GameKind) -> Json<CreateGameResponse> {
    let (game_id, game) = state.service.create_game(kind);
    Json(CreateGameResponse {
        game_id,
        state: game,
    })
}

async fn move_tictactoe(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
    payload: Result<Json<PlaceMove>, JsonRejection>,
) -> Result<Json<StateResponse>, GameError> {
    let Json(mv) = payload.map_err(reject)?;
    let action = Action::Place {
        position: mv.position,
    };
    submit(&state, GameKind::TicTacToe, &game_id, action)
}

async fn move_sudoku(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
    payload: Result<Json<FillMove>, JsonRejection>,
) -> Result<Json<StateResponse>, GameError> {
    let Json(mv) = payload.map_err(reject)?;
    let action = Action::Fill {
        row: mv.row,
        col: mv.col,
        value: mv.value,
    };
    submit(&state, GameKind::Sudoku, &game_id, action)
}

async fn roll_snakeladder(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<Json<StateResponse>, GameError> {
    submit(&state, GameKind::SnakesAndLadders, &game_id, Action::Roll)
}

fn submit(
    state: &AppState,
    kind: GameKind,
    game_id: &str,
    action: Action,
) -> Result<Json<StateResponse>, GameError> {
    let next = state.service.submit(kind, game_id, action)?;
    Ok(Json(StateResponse { state: next }))
}

async fn news(
    State(state): State<AppState>,
    payload: Result<Json<NewsRequest>, JsonRejection>,
) -> Result<Json<NewsResponse>, GameError> {
    let Json(request) = payload.map_err(reject)?;
    Ok(Json(state.news.fetch(&request).await))
}

/// Classifies an axum body rejection as a malformed request.
fn reject(rejection: JsonRejection) -> GameError {
    GameError::malformed(rejection.body_text())
}

// ─────────────────────────────────────────────────────────────
//  Error mapping
// ─────────────────────────────────────────────────────────────

impl IntoResponse for GameError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            GameError::InvalidMove { .. } | GameError::MalformedRequest { .. } => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            GameError::SessionNotFound { .. } => (StatusCode::NOT_FOUND, self.to_string()),
            GameError::Internal { .. } => {
                // A defect signal: log the details, surface a generic failure.
                error!(error = %self, "engine invariant violation");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
            }
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
