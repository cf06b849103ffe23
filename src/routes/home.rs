use axum::{Json, Router, extract::Query, routing::get};

use crate::{
    dto::home::{HomeQuery, HomeResponse},
    services::home_service,
    state::SharedState,
};

#[utoipa::path(
    get,
    path = "/",
    tag = "home",
    params(HomeQuery),
    responses((status = 200, description = "Welcome message", body = HomeResponse))
)]
/// Greet the caller, optionally with the service version and server time.
pub async fn home(Query(query): Query<HomeQuery>) -> Json<HomeResponse> {
    Json(home_service::welcome(query.detailed))
}

/// Configure the welcome route.
pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(home))
}
