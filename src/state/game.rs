//! In-memory game session: the started flag and the cumulative pong shots.

use thiserror::Error;

/// Errors returned when a transition is not allowed from the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// A game session is already running.
    #[error("game is already started")]
    AlreadyStarted,
    /// The operation needs a running game session.
    #[error("game has not started yet")]
    NotStarted,
}

/// Game session shared by every caller.
///
/// `shots` is held at zero outside of a session and only grows through
/// [`GameState::record_shot`] while one is running.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    started: bool,
    shots: u64,
}

impl GameState {
    /// Whether a game session is currently running.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Cumulative power received during the current session.
    pub fn shots(&self) -> u64 {
        self.shots
    }

    /// Begin a new session, clearing the shots counter.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.started {
            return Err(GameError::AlreadyStarted);
        }

        self.started = true;
        self.shots = 0;
        Ok(())
    }

    /// Clear the shots counter while keeping the session running.
    pub fn reset(&mut self) -> Result<(), GameError> {
        self.ensure_started()?;
        self.shots = 0;
        Ok(())
    }

    /// End the session and clear the shots counter.
    pub fn stop(&mut self) -> Result<(), GameError> {
        self.ensure_started()?;
        self.started = false;
        self.shots = 0;
        Ok(())
    }

    /// Add an already validated shot power to the session total, returning the new total.
    pub fn record_shot(&mut self, power: u64) -> Result<u64, GameError> {
        self.ensure_started()?;
        self.shots = self.shots.saturating_add(power);
        Ok(self.shots)
    }

    fn ensure_started(&self) -> Result<(), GameError> {
        if self.started {
            Ok(())
        } else {
            Err(GameError::NotStarted)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> GameState {
        let mut game = GameState::default();
        game.start().unwrap();
        game
    }

    #[test]
    fn initial_state_is_idle() {
        let game = GameState::default();
        assert!(!game.is_started());
        assert_eq!(game.shots(), 0);
    }

    #[test]
    fn start_twice_is_rejected_and_keeps_shots() {
        let mut game = started();
        game.record_shot(42).unwrap();

        assert_eq!(game.start(), Err(GameError::AlreadyStarted));
        assert!(game.is_started());
        assert_eq!(game.shots(), 42);
    }

    #[test]
    fn shots_accumulate_while_started() {
        let mut game = started();
        assert_eq!(game.record_shot(50), Ok(50));
        assert_eq!(game.record_shot(60), Ok(110));
        assert_eq!(game.shots(), 110);
    }

    #[test]
    fn reset_clears_shots_but_keeps_session() {
        let mut game = started();
        game.record_shot(30).unwrap();
        game.reset().unwrap();

        assert!(game.is_started());
        assert_eq!(game.shots(), 0);
    }

    #[test]
    fn stop_clears_shots_and_ends_session() {
        let mut game = started();
        game.record_shot(30).unwrap();
        game.stop().unwrap();

        assert!(!game.is_started());
        assert_eq!(game.shots(), 0);
    }

    #[test]
    fn idle_game_rejects_session_operations() {
        let mut game = GameState::default();

        assert_eq!(game.reset(), Err(GameError::NotStarted));
        assert_eq!(game.stop(), Err(GameError::NotStarted));
        assert_eq!(game.record_shot(10), Err(GameError::NotStarted));
        assert_eq!(game, GameState::default());
    }

    #[test]
    fn restart_after_stop_begins_from_zero() {
        let mut game = started();
        game.record_shot(99).unwrap();
        game.stop().unwrap();
        game.start().unwrap();

        assert!(game.is_started());
        assert_eq!(game.shots(), 0);
    }
}
