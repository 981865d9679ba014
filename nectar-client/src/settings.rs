//! Site settings API endpoints

use crate::NectarClient;
use crate::error::Result;
use nectar_core::domain::settings::SiteSetting;
use nectar_core::dto::settings::UpdateSetting;

impl NectarClient {
    /// List all site settings (admin)
    pub async fn list_settings(&self) -> Result<Vec<SiteSetting>> {
        let url = format!("{}/api/settings/list", self.base_url);
        let response = self.authorize(self.client.get(&url)).send().await?;

        self.handle_response(response).await
    }

    /// Set a site setting (admin)
    pub async fn set_setting(&self, key: &str, value: impl Into<String>) -> Result<SiteSetting> {
        let url = format!("{}/api/settings/{}", self.base_url, key);
        let req = UpdateSetting {
            value: value.into(),
        };
        let response = self.authorize(self.client.put(&url)).json(&req).send().await?;

        self.handle_response(response).await
    }
}
