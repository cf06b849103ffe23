use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for PongShots Back.
#[openapi(
    paths(
        crate::routes::home::home,
        crate::routes::ping::ping,
        crate::routes::health::healthcheck,
        crate::routes::game::start_game,
        crate::routes::game::game_status,
        crate::routes::game::reset_game,
        crate::routes::game::stop_game,
        crate::routes::game::pong_shot,
    ),
    components(
        schemas(
            crate::dto::home::HomeResponse,
            crate::dto::ping::PingResponse,
            crate::dto::health::HealthResponse,
            crate::dto::game::ShotRequest,
            crate::dto::game::StartGameResponse,
            crate::dto::game::GameStatusResponse,
            crate::dto::game::ActionResponse,
            crate::dto::game::StopGameResponse,
            crate::dto::game::PongShotResponse,
        )
    ),
    tags(
        (name = "home", description = "Welcome and ping endpoints"),
        (name = "health", description = "Health check endpoints"),
        (name = "game", description = "Game session and pong shots"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/",
            "/ping",
            "/healthcheck",
            "/game/start",
            "/game/status",
            "/game/reset",
            "/game/stop",
            "/game/pongshot",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
