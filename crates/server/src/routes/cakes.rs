use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use models::cake;
use service::pagination::PageRequest;
use service::query::{CakeFilter, CakeListing};
use service::{cakes, validate};

use crate::errors::ApiError;
use crate::routes::require_body;
use crate::state::ServerState;

/// Raw query parameters. Parsing is lenient: unparseable numbers are treated
/// as absent, never as an error, and pagination only activates when both
/// page and limit survive parsing.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    flavor: Option<String>,
    max_price: Option<String>,
    page: Option<String>,
    limit: Option<String>,
}

impl ListParams {
    pub(crate) fn into_filter(self) -> CakeFilter {
        let max_price = self.max_price.and_then(|v| v.parse::<f64>().ok());
        let page = self.page.and_then(|v| v.parse::<u64>().ok());
        let limit = self.limit.and_then(|v| v.parse::<u64>().ok());
        CakeFilter {
            flavor: self.flavor,
            max_price,
            page: page.zip(limit).map(|(p, l)| PageRequest::new(p, l)),
        }
    }
}

pub async fn list_cakes(
    State(state): State<ServerState>,
    Query(params): Query<ListParams>,
) -> Result<Json<CakeListing>, ApiError> {
    let listing = cakes::list_cakes(&state.db, &params.into_filter()).await?;
    Ok(Json(listing))
}

pub async fn get_cake(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<cake::Model>, ApiError> {
    Ok(Json(cakes::get_cake(&state.db, id).await?))
}

pub async fn create_cake(
    State(state): State<ServerState>,
    body: Option<Json<Value>>,
) -> Result<(StatusCode, Json<cake::Model>), ApiError> {
    let body = require_body(body)?;
    let new = validate::new_cake(&body)?;
    let created = cakes::create_cake(&state.db, new).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_cake(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    body: Option<Json<Value>>,
) -> Result<Json<cake::Model>, ApiError> {
    let body = require_body(body)?;
    let patch = validate::cake_patch(&body)?;
    Ok(Json(cakes::update_cake(&state.db, id, patch).await?))
}

pub async fn delete_cake(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    cakes::delete_cake(&state.db, id).await?;
    Ok(Json(json!({"message": "Cake deleted successfully"})))
}

pub async fn list_cakes_by_bakery(
    State(state): State<ServerState>,
    Path(bakery_id): Path<i32>,
    Query(params): Query<ListParams>,
) -> Result<Json<CakeListing>, ApiError> {
    let listing =
        cakes::list_cakes_by_bakery(&state.db, bakery_id, &params.into_filter()).await?;
    Ok(Json(listing))
}
