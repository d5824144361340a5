//! Item endpoints.

use axum::{
    Json,
    extract::{Query, State},
};
use cicdlearn_data::Item;
use tracing::{info, warn};

use crate::http::errors::ApiError;
use crate::models::CreateItemQuery;
use crate::state::ApiState;

pub(crate) async fn list_items(State(state): State<ApiState>) -> Result<Json<Vec<Item>>, ApiError> {
    match state.items.list_items().await {
        Ok(items) => Ok(Json(items)),
        Err(err) => {
            warn!(error = %err, "failed to list items");
            Err(ApiError::service_unavailable("item storage is unavailable"))
        }
    }
}

pub(crate) async fn create_item(
    State(state): State<ApiState>,
    Query(query): Query<CreateItemQuery>,
) -> Result<Json<Item>, ApiError> {
    let name = query
        .name
        .ok_or_else(|| ApiError::bad_request("query parameter `name` is required"))?;
    match state.items.create_item(&name).await {
        Ok(item) => {
            info!(item_id = item.id, "item created");
            Ok(Json(item))
        }
        Err(err) => {
            warn!(error = %err, "failed to create item");
            Err(ApiError::service_unavailable("item storage is unavailable"))
        }
    }
}
