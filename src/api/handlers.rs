//! HTTP request handlers for the Compensation Status Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
};
use tracing::info;
use uuid::Uuid;

use super::response::ApiErrorResponse;
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees/cache", delete(invalidate_all_handler))
        .route(
            "/employees/:national_key/status",
            get(employee_status_handler),
        )
        .route(
            "/employees/:national_key/cache",
            delete(invalidate_handler),
        )
        .with_state(state)
}

/// Handler for GET /employees/{national_key}/status.
///
/// Returns the computed status report, or the mapped error status for any
/// terminal failure in the request flow.
async fn employee_status_handler(
    State(state): State<AppState>,
    Path(national_key): Path<String>,
) -> impl IntoResponse {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        national_key = %national_key,
        "Processing status request"
    );

    match state.service().employee_status(&national_key).await {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                national_key = %report.national_key,
                status = %report.status,
                "Status request completed"
            );
            (StatusCode::OK, Json(report)).into_response()
        }
        Err(err) => {
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for DELETE /employees/{national_key}/cache.
///
/// Evicts the cached report for one employee. Always succeeds; evicting an
/// absent entry is not an error.
async fn invalidate_handler(
    State(state): State<AppState>,
    Path(national_key): Path<String>,
) -> impl IntoResponse {
    let removed = state.service().invalidate(&national_key);
    info!(national_key = %national_key, removed, "Cache invalidation");
    StatusCode::NO_CONTENT
}

/// Handler for DELETE /employees/cache.
///
/// Evicts every cached employee report and reports how many were removed.
async fn invalidate_all_handler(State(state): State<AppState>) -> impl IntoResponse {
    let removed = state.service().invalidate_all();
    info!(removed, "Bulk cache invalidation");
    (
        StatusCode::OK,
        Json(serde_json::json!({ "Invalidated": removed })),
    )
}
