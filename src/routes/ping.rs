use axum::{Json, Router, extract::State, routing::get};

use crate::{dto::ping::PingResponse, services::ping_service, state::SharedState};

#[utoipa::path(
    get,
    path = "/ping",
    tag = "home",
    responses((status = 200, description = "Ping counted", body = PingResponse))
)]
/// Increment and return the ping counter.
pub async fn ping(State(state): State<SharedState>) -> Json<PingResponse> {
    Json(ping_service::ping(&state))
}

/// Configure the ping route.
pub fn router() -> Router<SharedState> {
    Router::new().route("/ping", get(ping))
}
