use serde::Serialize;
use utoipa::ToSchema;

/// Response of the ungated ping counter.
#[derive(Debug, Serialize, ToSchema)]
pub struct PingResponse {
    pub message: String,
    /// Pings received since the process started, this one included.
    pub pings: u64,
}
