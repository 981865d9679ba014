//! Analytics API Handlers
//!
//! Click tracking is public (the frontend fires it on outbound link
//! clicks); the summary report is admin-only.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use nectar_core::domain::analytics::ProductClickSummary;
use nectar_core::dto::analytics::{AnalyticsQuery, RecordClick};

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};
use crate::service::analytics_service;

fn map_error(e: analytics_service::AnalyticsError) -> ApiError {
    match e {
        analytics_service::AnalyticsError::ProductNotFound(id) => {
            ApiError::NotFound(format!("Product {} not found", id))
        }
        analytics_service::AnalyticsError::ValidationError(msg) => ApiError::BadRequest(msg),
        analytics_service::AnalyticsError::DatabaseError(err) => ApiError::DatabaseError(err),
    }
}

/// POST /api/track/click
/// Record one affiliate-link click
pub async fn record_click(
    State(state): State<AppState>,
    Json(req): Json<RecordClick>,
) -> ApiResult<StatusCode> {
    tracing::debug!("Recording click for product: {}", req.product_id);

    analytics_service::record_click(&state.pool, req)
        .await
        .map_err(map_error)?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/analytics/summary
/// Per-product click counts over a trailing window
pub async fn summary(
    State(state): State<AppState>,
    Query(query): Query<AnalyticsQuery>,
) -> ApiResult<Json<Vec<ProductClickSummary>>> {
    tracing::debug!("Analytics summary requested");

    let rows = analytics_service::summary(&state.pool, query.days)
        .await
        .map_err(map_error)?;

    Ok(Json(rows))
}
