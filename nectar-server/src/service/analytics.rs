//! Analytics Service
//!
//! Click recording and summary reporting.

use nectar_core::domain::analytics::{ClickEvent, ProductClickSummary};
use nectar_core::dto::analytics::RecordClick;
use sqlx::PgPool;
use uuid::Uuid;

use crate::repository::{self, analytics_repository, product_repository};

/// Service error type
#[derive(Debug)]
pub enum AnalyticsError {
    ProductNotFound(Uuid),
    ValidationError(String),
    DatabaseError(sqlx::Error),
}

impl From<sqlx::Error> for AnalyticsError {
    fn from(err: sqlx::Error) -> Self {
        AnalyticsError::DatabaseError(err)
    }
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;

/// Record one affiliate-link click
pub async fn record_click(pool: &PgPool, req: RecordClick) -> Result<ClickEvent> {
    let product_id = req.product_id;

    // Unknown products are a 404, not a silent insert failure
    product_repository::find_by_id(pool, product_id)
        .await?
        .ok_or(AnalyticsError::ProductNotFound(product_id))?;

    // The pre-check can race a concurrent product delete; the resulting
    // FK violation on insert is the same 404
    let event = analytics_repository::insert_click(pool, req)
        .await
        .map_err(|e| {
            if repository::is_foreign_key_violation(&e) {
                AnalyticsError::ProductNotFound(product_id)
            } else {
                AnalyticsError::DatabaseError(e)
            }
        })?;

    tracing::debug!("Click recorded for product {}", event.product_id);

    Ok(event)
}

/// Per-product click counts over a trailing window
pub async fn summary(pool: &PgPool, days: Option<i64>) -> Result<Vec<ProductClickSummary>> {
    let days = days.unwrap_or(30);

    if !(1..=365).contains(&days) {
        return Err(AnalyticsError::ValidationError(
            "days must be between 1 and 365".to_string(),
        ));
    }

    let rows = analytics_repository::summary(pool, days).await?;
    Ok(rows)
}
