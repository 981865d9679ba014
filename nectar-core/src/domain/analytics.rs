//! Click analytics domain types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One outbound affiliate-link click
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClickEvent {
    pub id: i64,
    pub product_id: Uuid,
    /// Article the click originated from, if known
    pub article_id: Option<Uuid>,
    pub referrer: Option<String>,
    pub occurred_at: chrono::DateTime<chrono::Utc>,
}

/// Aggregated clicks for one product over a reporting window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductClickSummary {
    pub product_id: Uuid,
    pub product_title: String,
    pub clicks: i64,
}
