use serde::Serialize;
use utoipa::ToSchema;

/// Liveness payload returned by the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Always "ok" once the server answers.
    pub status: String,
    /// Whether a game session is running.
    pub game_started: bool,
}

impl HealthResponse {
    /// Create a health response indicating the system is operational.
    pub fn ok(game_started: bool) -> Self {
        Self {
            status: "ok".to_string(),
            game_started,
        }
    }
}
