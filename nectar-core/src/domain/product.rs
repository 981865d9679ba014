//! Product domain types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Marketplace product record
///
/// Structure shared between the server (persists) and the generator
/// (renders review articles from it).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    /// Marketplace item identifier (unique per product)
    pub asin: String,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    /// Price in minor units to avoid float drift
    pub price_cents: i64,
    pub currency: String,
    /// Average customer rating, 0.0..=5.0
    pub rating: Option<f64>,
    pub review_count: Option<i64>,
    pub image_url: Option<String>,
    pub source: ProductSource,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Where a product row came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductSource {
    /// Fetched from the external marketplace API
    Marketplace,
    /// Entered by an admin through the API or CLI
    Manual,
}

impl ProductSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductSource::Marketplace => "marketplace",
            ProductSource::Manual => "manual",
        }
    }
}

impl std::str::FromStr for ProductSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "marketplace" => Ok(ProductSource::Marketplace),
            "manual" => Ok(ProductSource::Manual),
            other => Err(format!("unknown product source: {}", other)),
        }
    }
}
