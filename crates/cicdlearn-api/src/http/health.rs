//! Liveness endpoint.
//!
//! Reports `ok` whenever the process can answer HTTP; storage is not probed.

use axum::Json;

use crate::models::HealthResponse;

pub(crate) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
