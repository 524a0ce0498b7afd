use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use models::bakery;
use service::{bakeries, validate};

use crate::errors::ApiError;
use crate::routes::require_body;
use crate::state::ServerState;

pub async fn list_bakeries(
    State(state): State<ServerState>,
) -> Result<Json<Vec<bakery::Model>>, ApiError> {
    Ok(Json(bakeries::list_bakeries(&state.db).await?))
}

pub async fn get_bakery(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<bakery::Model>, ApiError> {
    Ok(Json(bakeries::get_bakery(&state.db, id).await?))
}

pub async fn create_bakery(
    State(state): State<ServerState>,
    body: Option<Json<Value>>,
) -> Result<(StatusCode, Json<bakery::Model>), ApiError> {
    let body = require_body(body)?;
    let new = validate::new_bakery(&body)?;
    let created = bakeries::create_bakery(&state.db, new).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_bakery(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    body: Option<Json<Value>>,
) -> Result<Json<bakery::Model>, ApiError> {
    let body = require_body(body)?;
    let patch = validate::bakery_patch(&body)?;
    Ok(Json(bakeries::update_bakery(&state.db, id, patch).await?))
}

pub async fn delete_bakery(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    bakeries::delete_bakery(&state.db, id).await?;
    Ok(Json(json!({"message": "Bakery deleted successfully"})))
}
