//! Nectar HTTP Client
//!
//! A simple, type-safe HTTP client for the Nectar server API.
//!
//! This crate provides a unified interface for the generator and CLI to
//! interact with the server, eliminating code duplication and ensuring
//! consistency.
//!
//! # Example
//!
//! ```no_run
//! use nectar_client::NectarClient;
//! use nectar_core::dto::auth::LoginRequest;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut client = NectarClient::new("http://localhost:8080");
//!
//!     let login = client.login(LoginRequest {
//!         username: "admin".to_string(),
//!         password: "secret".to_string(),
//!     }).await?;
//!     client.set_token(login.token);
//!
//!     let products = client.list_products(&Default::default()).await?;
//!     println!("{} products", products.len());
//!     Ok(())
//! }
//! ```

pub mod error;
mod analytics;
mod articles;
mod auth;
mod products;
mod settings;

// Re-export commonly used types
pub use error::{ClientError, Result};

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

/// HTTP client for the Nectar server API
///
/// Methods are organized into logical groups:
/// - Auth (login)
/// - Product management (create, upsert, list, get, update, delete)
/// - Article lifecycle (create, list, get, publish, delete)
/// - Click tracking and analytics
/// - Site settings
#[derive(Debug, Clone)]
pub struct NectarClient {
    /// Base URL of the server (e.g., "http://localhost:8080")
    base_url: String,
    /// HTTP client instance
    client: Client,
    /// Bearer token for admin endpoints, if authenticated
    token: Option<String>,
}

impl NectarClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the server API (e.g., "http://localhost:8080")
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            token: None,
        }
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows configuring timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            token: None,
        }
    }

    /// Set the bearer token used for admin endpoints
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Builder-style variant of [`set_token`](Self::set_token)
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Drop the stored bearer token
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Whether a bearer token is currently set
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Get the base URL of the server
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Request/Response Handlers
    // =============================================================================

    /// Attach the bearer token to a request if one is set
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Handle an API response and deserialize JSON
    ///
    /// Checks the status code and returns an appropriate error if the
    /// request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response that returns no content (e.g., DELETE operations)
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = NectarClient::new("http://localhost:8080");
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert!(!client.has_token());
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = NectarClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_token_lifecycle() {
        let mut client = NectarClient::new("http://localhost:8080").with_token("abc");
        assert!(client.has_token());
        client.clear_token();
        assert!(!client.has_token());
        client.set_token("def");
        assert!(client.has_token());
    }
}
