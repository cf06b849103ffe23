/// Game session domain type and its transitions.
pub mod game;

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use tokio::sync::RwLock;

use crate::state::game::GameState;

/// Handle cloned into every request handler.
pub type SharedState = Arc<AppState>;

/// Central application state: the game session and the ping counter.
#[derive(Default)]
pub struct AppState {
    game: RwLock<GameState>,
    pings: AtomicU64,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    ///
    /// The game starts idle with no shots recorded.
    pub fn new() -> SharedState {
        Arc::new(Self::default())
    }

    /// Current game session.
    ///
    /// Mutations must hold the write guard for the whole check-and-modify sequence.
    pub fn game(&self) -> &RwLock<GameState> {
        &self.game
    }

    /// Increment the ping counter and return its new value.
    pub fn record_ping(&self) -> u64 {
        self.pings.fetch_add(1, Ordering::Relaxed) + 1
    }
}
