//! Game session operations. Each one runs its precondition checks and the
//! resulting mutation under a single write guard on the shared game state.

use tracing::{debug, info};
use validator::Validate;

use crate::{
    dto::game::{
        ActionResponse, GameStatusResponse, PongShotResponse, ShotRequest, StartGameResponse,
        StopGameResponse,
    },
    error::ServiceError,
    state::SharedState,
};

const SHOT_BEFORE_START: &str = "Game has not started yet. Please start the game first.";
const MISSING_POWER: &str = "You must provide power!";
const POWER_OUT_OF_RANGE: &str = "Power must be between 1 and 100.";

/// Begin a game session, or report a no-op when one is already running.
pub async fn start_game(state: &SharedState) -> Result<StartGameResponse, ServiceError> {
    let mut game = state.game().write().await;
    game.start().inspect_err(|_| debug!("start requested while a game is running"))?;

    info!("game started");
    Ok(StartGameResponse {
        message: "Game has started successfully.".into(),
        pong_shots: game.shots(),
    })
}

/// Return whether a session is running and the shots accumulated so far.
pub async fn game_status(state: &SharedState) -> GameStatusResponse {
    let game = state.game().read().await;
    GameStatusResponse {
        game_started: game.is_started(),
        pong_shots: game.shots(),
    }
}

/// Clear the shots of the running session.
pub async fn reset_game(state: &SharedState) -> Result<ActionResponse, ServiceError> {
    let mut game = state.game().write().await;
    let previous = game.shots();
    game.reset()
        .inspect_err(|_| debug!("reset requested without a running game"))?;

    info!(previous, "game reset");
    Ok(ActionResponse {
        message: "Game has been reset successfully.".into(),
    })
}

/// End the running session and clear its shots.
pub async fn stop_game(state: &SharedState) -> Result<StopGameResponse, ServiceError> {
    let mut game = state.game().write().await;
    let final_shots = game.shots();
    game.stop()
        .inspect_err(|_| debug!("stop requested without a running game"))?;

    info!(final_shots, "game stopped");
    Ok(StopGameResponse {
        message: "Game has been stopped and reset.".into(),
        pong_shots: game.shots(),
        game_started: game.is_started(),
    })
}

/// Add the power of a shot to the running session.
///
/// Checks run in order and the first failure wins: a running game, a
/// `power` value, then a power within `1..=100`.
pub async fn pong_shot(
    state: &SharedState,
    shot: Option<ShotRequest>,
) -> Result<PongShotResponse, ServiceError> {
    let mut game = state.game().write().await;
    if !game.is_started() {
        debug!("shot received without a running game");
        return Err(ServiceError::PreconditionNotMet(SHOT_BEFORE_START.into()));
    }

    let shot = shot.unwrap_or_default();
    let Some(power) = shot.power else {
        debug!("shot received without power");
        return Err(ServiceError::InvalidInput(MISSING_POWER.into()));
    };
    shot.validate()
        .inspect_err(|_| debug!(power, "shot power out of range"))?;

    let power = u64::try_from(power)
        .map_err(|_| ServiceError::InvalidInput(POWER_OUT_OF_RANGE.into()))?;
    let pong_shots = game.record_shot(power)?;

    info!(power, pong_shots, "pong shot received");
    Ok(PongShotResponse {
        message: format!("Received pong shot with power {power}"),
        pong_shots,
    })
}
