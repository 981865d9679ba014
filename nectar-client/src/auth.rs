//! Auth API endpoints

use crate::NectarClient;
use crate::error::Result;
use nectar_core::dto::auth::{LoginRequest, LoginResponse};

impl NectarClient {
    /// Authenticate an admin and return a bearer token
    ///
    /// The token is not stored automatically; call
    /// [`set_token`](Self::set_token) with the returned value.
    pub async fn login(&self, req: LoginRequest) -> Result<LoginResponse> {
        let url = format!("{}/api/auth/login", self.base_url);
        let response = self.client.post(&url).json(&req).send().await?;

        self.handle_response(response).await
    }
}
