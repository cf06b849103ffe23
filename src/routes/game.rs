use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    routing::{get, post},
};

use crate::{
    dto::game::{
        ActionResponse, GameStatusResponse, PongShotResponse, ShotRequest, StartGameResponse,
        StopGameResponse,
    },
    error::AppError,
    services::game_service,
    state::SharedState,
};

/// Routes driving the game session and its pong shots.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/game/start", post(start_game))
        .route("/game/status", get(game_status))
        .route("/game/reset", post(reset_game))
        .route("/game/stop", post(stop_game))
        .route("/game/pongshot", post(pong_shot))
}

/// Start a game session with zero shots.
#[utoipa::path(
    post,
    path = "/game/start",
    tag = "game",
    responses(
        (status = 200, description = "Game started", body = StartGameResponse),
        (status = 304, description = "Game is already started")
    )
)]
pub async fn start_game(
    State(state): State<SharedState>,
) -> Result<Json<StartGameResponse>, AppError> {
    Ok(Json(game_service::start_game(&state).await?))
}

/// Report whether a game is running and its current shots.
#[utoipa::path(
    get,
    path = "/game/status",
    tag = "game",
    responses((status = 200, description = "Current game state", body = GameStatusResponse))
)]
pub async fn game_status(State(state): State<SharedState>) -> Json<GameStatusResponse> {
    Json(game_service::game_status(&state).await)
}

/// Clear the shots of the running game.
#[utoipa::path(
    post,
    path = "/game/reset",
    tag = "game",
    responses(
        (status = 200, description = "Game reset", body = ActionResponse),
        (status = 400, description = "Game has not started", body = ActionResponse)
    )
)]
pub async fn reset_game(
    State(state): State<SharedState>,
) -> Result<Json<ActionResponse>, AppError> {
    Ok(Json(game_service::reset_game(&state).await?))
}

/// Stop the running game and clear its shots.
#[utoipa::path(
    post,
    path = "/game/stop",
    tag = "game",
    responses(
        (status = 200, description = "Game stopped", body = StopGameResponse),
        (status = 400, description = "Game has not started", body = ActionResponse)
    )
)]
pub async fn stop_game(
    State(state): State<SharedState>,
) -> Result<Json<StopGameResponse>, AppError> {
    Ok(Json(game_service::stop_game(&state).await?))
}

/// Submit a pong shot. The body is optional so a missing payload reaches the
/// service and is reported with the other shot checks.
#[utoipa::path(
    post,
    path = "/game/pongshot",
    tag = "game",
    request_body(content = ShotRequest, description = "Shot power between 1 and 100"),
    responses(
        (status = 200, description = "Shot accepted", body = PongShotResponse),
        (status = 400, description = "Game not started, missing power or power out of range", body = ActionResponse)
    )
)]
pub async fn pong_shot(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<PongShotResponse>, AppError> {
    let shot = parse_shot(&body)?;
    Ok(Json(game_service::pong_shot(&state, shot).await?))
}

/// An empty (or blank) body and a JSON `null` both mean "no payload".
fn parse_shot(body: &[u8]) -> Result<Option<ShotRequest>, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    serde_json::from_slice(body)
        .map_err(|err| AppError::BadRequest(format!("Malformed shot payload: {err}")))
}
