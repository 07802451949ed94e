// 🌐 HTTP Layer - REST API with Axum
// Thin wrapper: decode JSON, call the processor, map outcomes to status codes

use crate::processor::{ProcessError, ReceiptProcessor};
use crate::receipt::Receipt;
use crate::schema::ValidationError;
use crate::store::ReceiptId;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::debug;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    processor: Arc<ReceiptProcessor>,
}

impl AppState {
    pub fn new(processor: ReceiptProcessor) -> Self {
        AppState {
            processor: Arc::new(processor),
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Serialize)]
struct ProcessResponse {
    id: String,
}

#[derive(Serialize)]
struct PointsResponse {
    points: u64,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct FieldError {
    field: String,
    message: String,
}

impl From<ValidationError> for FieldError {
    fn from(e: ValidationError) -> Self {
        Self {
            field: e.field,
            message: e.message,
        }
    }
}

/// Error body for every non-2xx response
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    details: Vec<FieldError>,
}

/// Errors surfaced to HTTP callers
pub enum ApiError {
    BadRequest(String, Vec<ValidationError>),
    NotFound,
}

impl From<ProcessError> for ApiError {
    fn from(e: ProcessError) -> Self {
        match e {
            ProcessError::InvalidReceipt(errors) => {
                ApiError::BadRequest("The receipt is invalid.".to_string(), errors)
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        debug!(error = %rejection.body_text(), "Rejected request body");
        ApiError::BadRequest("The receipt is invalid.".to_string(), Vec::new())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(error, details) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error,
                    details: details.into_iter().map(FieldError::from).collect(),
                },
            ),
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error: "No receipt found for that ID.".to_string(),
                    details: Vec::new(),
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /health - Health check
async fn health_check() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// POST /receipts/process - Score and store a receipt
async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Result<Json<ProcessResponse>, ApiError> {
    let Json(receipt) = payload?;
    let scored = state.processor.process(&receipt)?;

    Ok(Json(ProcessResponse {
        id: scored.id.to_string(),
    }))
}

/// GET /receipts/:id/points - Look up points for a processed receipt
async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    // Anything that isn't a UUID was never handed out
    let id: ReceiptId = id.parse().map_err(|_| ApiError::NotFound)?;

    state
        .processor
        .points(&id)
        .map(|points| Json(PointsResponse { points }))
        .ok_or(ApiError::NotFound)
}

// ============================================================================
// Router
// ============================================================================

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/:id/points", get(get_points))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ============================================================================
// TESTS
// ============================================================================
