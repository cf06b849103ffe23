/// OpenAPI documentation generation.
pub mod documentation;
/// Game session operations and pong shots.
pub mod game_service;
/// Health check service.
pub mod health_service;
/// Welcome payload.
pub mod home_service;
/// Ungated ping counter.
pub mod ping_service;
