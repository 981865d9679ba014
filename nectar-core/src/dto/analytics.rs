//! Analytics DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to record one affiliate-link click
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordClick {
    pub product_id: Uuid,
    #[serde(default)]
    pub article_id: Option<Uuid>,
    #[serde(default)]
    pub referrer: Option<String>,
}

/// Query parameters for the analytics summary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsQuery {
    /// Trailing window in days (default 30)
    #[serde(default)]
    pub days: Option<i64>,
}
