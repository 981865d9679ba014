//! Analytics API endpoints

use crate::NectarClient;
use crate::error::Result;
use nectar_core::domain::analytics::ProductClickSummary;
use nectar_core::dto::analytics::RecordClick;

impl NectarClient {
    /// Record one affiliate-link click
    pub async fn record_click(&self, req: RecordClick) -> Result<()> {
        let url = format!("{}/api/track/click", self.base_url);
        let response = self.client.post(&url).json(&req).send().await?;

        self.handle_empty_response(response).await
    }

    /// Per-product click counts over a trailing window (admin)
    pub async fn analytics_summary(&self, days: Option<i64>) -> Result<Vec<ProductClickSummary>> {
        let url = format!("{}/api/analytics/summary", self.base_url);
        let mut request = self.authorize(self.client.get(&url));

        if let Some(days) = days {
            request = request.query(&[("days", days)]);
        }

        let response = request.send().await?;

        self.handle_response(response).await
    }
}
