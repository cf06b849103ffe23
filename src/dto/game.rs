use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Body of a pong shot submission.
///
/// `power` is kept wide and optional so that missing and out-of-range values
/// are reported by the service rather than rejected during deserialization.
#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
pub struct ShotRequest {
    #[validate(range(min = 1, max = 100, message = "Power must be between 1 and 100."))]
    #[schema(minimum = 1, maximum = 100)]
    pub power: Option<i64>,
}

/// Response emitted when a game session starts.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StartGameResponse {
    pub message: String,
    pub pong_shots: u64,
}

/// Snapshot of the game session.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameStatusResponse {
    pub game_started: bool,
    pub pong_shots: u64,
}

/// Generic action acknowledgement.
#[derive(Debug, Serialize, ToSchema)]
pub struct ActionResponse {
    pub message: String,
}

/// Response returned when a game is stopped.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StopGameResponse {
    pub message: String,
    pub pong_shots: u64,
    pub game_started: bool,
}

/// Result of an accepted pong shot, returning the updated total.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PongShotResponse {
    pub message: String,
    pub pong_shots: u64,
}

