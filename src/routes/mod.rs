use axum::Router;

use crate::state::SharedState;

pub mod docs;
pub mod game;
pub mod health;
pub mod home;
pub mod ping;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    home::router()
        .merge(ping::router())
        .merge(health::router())
        .merge(game::router())
        .merge(docs::router())
        .with_state(state)
}
