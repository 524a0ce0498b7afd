use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Map, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::{error, Level};

use common::types::Health;

use crate::errors::ApiError;
use crate::state::ServerState;

pub mod bakeries;
pub mod cakes;
pub mod links;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Deliberate failure endpoint used to exercise the 500 envelope.
async fn trigger_internal_error() -> ApiError {
    ApiError::Internal(anyhow::anyhow!("deliberate test failure"))
}

/// A missing body, a body that is not a JSON object, and an empty object all
/// count as "no input" (400).
pub(crate) fn require_body(body: Option<Json<Value>>) -> Result<Map<String, Value>, ApiError> {
    match body {
        Some(Json(Value::Object(map))) if !map.is_empty() => Ok(map),
        _ => Err(ApiError::InputMissing),
    }
}

/// The 500 envelope hides the failure from the caller, so record the request
/// path here for the operator.
async fn log_server_errors(req: Request, next: Next) -> Response {
    let path = req.uri().path().to_owned();
    let res = next.run(req).await;
    if res.status() == StatusCode::INTERNAL_SERVER_ERROR {
        error!(%path, "request failed with an internal error");
    }
    res
}

/// Build the full application router.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let api = Router::new()
        .route("/cakes", get(cakes::list_cakes).post(cakes::create_cake))
        .route(
            "/cakes/:id",
            get(cakes::get_cake).put(cakes::update_cake).delete(cakes::delete_cake),
        )
        .route("/bakeries", get(bakeries::list_bakeries).post(bakeries::create_bakery))
        .route(
            "/bakeries/:id",
            get(bakeries::get_bakery)
                .put(bakeries::update_bakery)
                .delete(bakeries::delete_bakery),
        )
        .route(
            "/cakes/:cake_id/bakeries/:bakery_id",
            post(links::add_bakery_to_cake).delete(links::remove_bakery_from_cake),
        )
        .route("/bakeries/:bakery_id/cakes", get(cakes::list_cakes_by_bakery))
        .route("/trigger-500", get(trigger_internal_error));

    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api)
        .with_state(state)
        .layer(middleware::from_fn(log_server_errors))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
