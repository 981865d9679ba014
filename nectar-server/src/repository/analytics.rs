//! Click Analytics Repository
//!
//! Handles all database operations related to affiliate click tracking.

use nectar_core::domain::analytics::{ClickEvent, ProductClickSummary};
use nectar_core::dto::analytics::RecordClick;
use sqlx::PgPool;
use uuid::Uuid;

/// Record one click event
pub async fn insert_click(pool: &PgPool, req: RecordClick) -> Result<ClickEvent, sqlx::Error> {
    let now = chrono::Utc::now();

    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO click_events (product_id, article_id, referrer, occurred_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(req.product_id)
    .bind(req.article_id)
    .bind(&req.referrer)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(ClickEvent {
        id,
        product_id: req.product_id,
        article_id: req.article_id,
        referrer: req.referrer,
        occurred_at: now,
    })
}

/// Per-product click counts over a trailing window, descending
pub async fn summary(pool: &PgPool, days: i64) -> Result<Vec<ProductClickSummary>, sqlx::Error> {
    let since = chrono::Utc::now() - chrono::Duration::days(days);

    let rows = sqlx::query_as::<_, SummaryRow>(
        r#"
        SELECT c.product_id, p.title AS product_title, COUNT(*) AS clicks
        FROM click_events c
        JOIN products p ON p.id = c.product_id
        WHERE c.occurred_at >= $1
        GROUP BY c.product_id, p.title
        ORDER BY clicks DESC
        "#,
    )
    .bind(since)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|r| r.into()).collect())
}

// =============================================================================
// Database Row Types
// =============================================================================

#[derive(sqlx::FromRow)]
struct SummaryRow {
    product_id: Uuid,
    product_title: String,
    clicks: i64,
}

impl From<SummaryRow> for ProductClickSummary {
    fn from(row: SummaryRow) -> Self {
        ProductClickSummary {
            product_id: row.product_id,
            product_title: row.product_title,
            clicks: row.clicks,
        }
    }
}
