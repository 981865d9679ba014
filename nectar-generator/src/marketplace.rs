//! Marketplace API client
//!
//! Fetches product data from the external marketplace search endpoint.
//! Transient failures are retried with exponential backoff up to a small
//! bound; anything still failing after that surfaces to the caller,
//! which switches the cycle into fallback mode.

use nectar_core::domain::product::ProductSource;
use nectar_core::dto::product::CreateProduct;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::config::MarketplaceConfig;

const MAX_RETRIES: u32 = 3;
const INITIAL_DELAY_MS: u64 = 500;
const MAX_DELAY_MS: u64 = 5_000;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, Error)]
pub enum MarketplaceError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    #[error("Failed to parse marketplace response: {0}")]
    Parse(String),
}

impl MarketplaceError {
    /// Returns true if this error is transient and the request should be retried.
    fn is_retryable(&self) -> bool {
        match self {
            MarketplaceError::Network(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            MarketplaceError::HttpStatus(status) => *status >= 500 || *status == 429,
            MarketplaceError::Parse(_) => false,
        }
    }
}

/// Client for the marketplace product search API
#[derive(Debug, Clone)]
pub struct MarketplaceClient {
    config: MarketplaceConfig,
    http: reqwest::Client,
}

impl MarketplaceClient {
    pub fn new(config: MarketplaceConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { config, http })
    }

    /// The affiliate partner tag configured for this client
    pub fn partner_tag(&self) -> &str {
        &self.config.partner_tag
    }

    /// Search the marketplace for top products in a category
    ///
    /// Retries transient failures with exponential backoff before
    /// giving up; the caller falls back to stored products on error.
    pub async fn search_products(
        &self,
        category: &str,
        limit: usize,
    ) -> Result<Vec<CreateProduct>, MarketplaceError> {
        let mut attempt = 0;
        let mut delay_ms = INITIAL_DELAY_MS;

        loop {
            attempt += 1;

            match self.search_once(category, limit).await {
                Ok(items) => return Ok(items),
                Err(e) if e.is_retryable() && attempt < MAX_RETRIES => {
                    tracing::warn!(
                        "Marketplace search failed (attempt {}/{}): {}",
                        attempt,
                        MAX_RETRIES,
                        e
                    );
                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                    delay_ms = (delay_ms * 2).min(MAX_DELAY_MS);
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn search_once(
        &self,
        category: &str,
        limit: usize,
    ) -> Result<Vec<CreateProduct>, MarketplaceError> {
        let url = format!(
            "{}/v1/products/search",
            self.config.endpoint.trim_end_matches('/')
        );

        let response = self
            .http
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.config.access_key))
            .query(&[
                ("category", category),
                ("sort", "bestselling"),
                ("limit", &limit.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketplaceError::HttpStatus(status.as_u16()));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| MarketplaceError::Parse(e.to_string()))?;

        Ok(body
            .items
            .into_iter()
            .map(|item| item.into_create_product(category))
            .collect())
    }
}

// =============================================================================
// Wire Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct SearchResponse {
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    asin: String,
    title: String,
    #[serde(default)]
    description: Option<String>,
    price: ItemPrice,
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default)]
    review_count: Option<i64>,
    #[serde(default)]
    image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ItemPrice {
    amount_cents: i64,
    #[serde(default = "default_currency")]
    currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl SearchItem {
    fn into_create_product(self, category: &str) -> CreateProduct {
        CreateProduct {
            asin: self.asin,
            title: self.title,
            description: self.description,
            category: category.to_string(),
            price_cents: self.price.amount_cents,
            currency: self.price.currency,
            rating: self.rating,
            review_count: self.review_count,
            image_url: self.image_url,
            source: ProductSource::Marketplace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_retryability() {
        assert!(MarketplaceError::HttpStatus(500).is_retryable());
        assert!(MarketplaceError::HttpStatus(503).is_retryable());
        assert!(MarketplaceError::HttpStatus(429).is_retryable());
        assert!(!MarketplaceError::HttpStatus(404).is_retryable());
        assert!(!MarketplaceError::HttpStatus(401).is_retryable());
    }

    #[test]
    fn test_parse_error_not_retryable() {
        assert!(!MarketplaceError::Parse("bad json".to_string()).is_retryable());
    }

    #[test]
    fn test_search_item_conversion() {
        let raw = serde_json::json!({
            "asin": "B0TEST123",
            "title": "Wireless Headphones",
            "price": { "amount_cents": 12999 },
            "rating": 4.4
        });

        let item: SearchItem = serde_json::from_value(raw).unwrap();
        let product = item.into_create_product("electronics");

        assert_eq!(product.asin, "B0TEST123");
        assert_eq!(product.category, "electronics");
        assert_eq!(product.price_cents, 12999);
        assert_eq!(product.currency, "USD");
        assert_eq!(product.source, ProductSource::Marketplace);
        assert_eq!(product.review_count, None);
    }
}
