//! Product DTOs

use serde::{Deserialize, Serialize};

use crate::domain::product::ProductSource;

/// Request to create a new product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProduct {
    pub asin: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    pub price_cents: i64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: Option<i64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_source")]
    pub source: ProductSource,
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_source() -> ProductSource {
    ProductSource::Manual
}

/// Request to update an existing product
///
/// All fields optional; omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProduct {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price_cents: Option<i64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: Option<i64>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Query parameters for product listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductQuery {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub offset: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_product_minimal_payload_defaults() {
        let payload = r#"{
            "asin": "B0TESTASIN",
            "title": "Test Product",
            "category": "kitchen",
            "price_cents": 1999
        }"#;

        let req: CreateProduct = serde_json::from_str(payload).unwrap();

        assert_eq!(req.currency, "USD");
        assert_eq!(req.source, ProductSource::Manual);
        assert!(req.description.is_none());
        assert!(req.rating.is_none());
    }

    #[test]
    fn test_update_product_empty_payload() {
        let req: UpdateProduct = serde_json::from_str("{}").unwrap();

        assert!(req.title.is_none());
        assert!(req.price_cents.is_none());
    }
}
