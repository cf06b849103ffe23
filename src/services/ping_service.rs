use tracing::debug;

use crate::{dto::ping::PingResponse, state::SharedState};

/// Count a ping. Independent from the game session and never gated.
pub fn ping(state: &SharedState) -> PingResponse {
    let pings = state.record_ping();
    debug!(pings, "ping received");
    PingResponse {
        message: "pong".into(),
        pings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    #[test]
    fn pings_increment_without_touching_the_game() {
        let state = AppState::new();

        assert_eq!(ping(&state).pings, 1);
        assert_eq!(ping(&state).pings, 2);
        assert_eq!(ping(&state).pings, 3);

        let game = state.game().try_read().unwrap();
        assert!(!game.is_started());
        assert_eq!(game.shots(), 0);
    }
}
