use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use service::errors::ServiceError;
use service::validate::FieldErrors;
use tracing::error;

/// Uniform error envelope for every handler.
///
/// - `InputMissing` — no body, an unparseable body, or an empty object: 400
/// - `Validation` — field rule violations: 422, body is the field map itself
/// - `NotFound` — id or path-referenced entity absent: 404, fixed body
/// - `Internal` — anything unexpected: 500, fixed body; the underlying error
///   is logged and never returned to the caller
#[derive(Debug)]
pub enum ApiError {
    InputMissing,
    Validation(FieldErrors),
    NotFound,
    Internal(anyhow::Error),
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(_) => ApiError::NotFound,
            ServiceError::Db(e) => ApiError::Internal(e.into()),
        }
    }
}

impl From<FieldErrors> for ApiError {
    fn from(errors: FieldErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InputMissing => (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "No input data provided"})),
            )
                .into_response(),
            ApiError::Validation(errors) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(errors)).into_response()
            }
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({"error": "Resource not found"})),
            )
                .into_response(),
            ApiError::Internal(err) => {
                error!(error = %err, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "An unexpected error occurred"})),
                )
                    .into_response()
            }
        }
    }
}
