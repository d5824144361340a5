//! Event endpoints.

use axum::{
    Json,
    extract::{Query, State},
};
use cicdlearn_data::{Event, MAX_RECENT_EVENTS};
use tracing::{info, warn};

use crate::http::errors::ApiError;
use crate::models::CreateEventQuery;
use crate::state::ApiState;

pub(crate) async fn list_events(
    State(state): State<ApiState>,
) -> Result<Json<Vec<Event>>, ApiError> {
    match state.events.recent_events(MAX_RECENT_EVENTS).await {
        Ok(events) => Ok(Json(events)),
        Err(err) => {
            warn!(error = %err, "failed to list events");
            Err(ApiError::service_unavailable("event storage is unavailable"))
        }
    }
}

pub(crate) async fn create_event(
    State(state): State<ApiState>,
    Query(query): Query<CreateEventQuery>,
) -> Result<Json<Event>, ApiError> {
    let message = query
        .message
        .ok_or_else(|| ApiError::bad_request("query parameter `message` is required"))?;
    match state.events.create_event(&message).await {
        Ok(event) => {
            info!(event_id = %event.id, "event recorded");
            Ok(Json(event))
        }
        Err(err) => {
            warn!(error = %err, "failed to record event");
            Err(ApiError::service_unavailable("event storage is unavailable"))
        }
    }
}
