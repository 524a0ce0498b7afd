use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use service::links;

use crate::errors::ApiError;
use crate::state::ServerState;

pub async fn add_bakery_to_cake(
    State(state): State<ServerState>,
    Path((cake_id, bakery_id)): Path<(i32, i32)>,
) -> Result<Json<Value>, ApiError> {
    links::add_link(&state.db, cake_id, bakery_id).await?;
    Ok(Json(json!({"message": "Bakery added to cake"})))
}

pub async fn remove_bakery_from_cake(
    State(state): State<ServerState>,
    Path((cake_id, bakery_id)): Path<(i32, i32)>,
) -> Result<Json<Value>, ApiError> {
    links::remove_link(&state.db, cake_id, bakery_id).await?;
    Ok(Json(json!({"message": "Bakery removed from cake"})))
}
