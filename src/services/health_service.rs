use tracing::debug;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Respond with a liveness payload including whether a game is running.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    let game_started = state.game().read().await.is_started();
    debug!(game_started, "health check");
    HealthResponse::ok(game_started)
}
