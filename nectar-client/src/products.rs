//! Product-related API endpoints

use crate::NectarClient;
use crate::error::Result;
use nectar_core::domain::product::Product;
use nectar_core::dto::product::{CreateProduct, ProductQuery, UpdateProduct};
use uuid::Uuid;

impl NectarClient {
    // =============================================================================
    // Product Management
    // =============================================================================

    /// Create a new product (admin)
    pub async fn create_product(&self, req: CreateProduct) -> Result<Product> {
        let url = format!("{}/api/product/create", self.base_url);
        let response = self.authorize(self.client.post(&url)).json(&req).send().await?;

        self.handle_response(response).await
    }

    /// Insert or refresh a product keyed on asin (admin)
    pub async fn upsert_product(&self, req: CreateProduct) -> Result<Product> {
        let url = format!("{}/api/product/upsert", self.base_url);
        let response = self.authorize(self.client.post(&url)).json(&req).send().await?;

        self.handle_response(response).await
    }

    /// List products, optionally filtered by category
    pub async fn list_products(&self, query: &ProductQuery) -> Result<Vec<Product>> {
        let url = format!("{}/api/product/list", self.base_url);
        let response = self.client.get(&url).query(query).send().await?;

        self.handle_response(response).await
    }

    /// Get a product by ID
    pub async fn get_product(&self, product_id: Uuid) -> Result<Product> {
        let url = format!("{}/api/product/{}", self.base_url, product_id);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Update a product (admin)
    pub async fn update_product(&self, product_id: Uuid, req: UpdateProduct) -> Result<Product> {
        let url = format!("{}/api/product/{}", self.base_url, product_id);
        let response = self.authorize(self.client.put(&url)).json(&req).send().await?;

        self.handle_response(response).await
    }

    /// Delete a product (admin)
    pub async fn delete_product(&self, product_id: Uuid) -> Result<()> {
        let url = format!("{}/api/product/{}", self.base_url, product_id);
        let response = self.authorize(self.client.delete(&url)).send().await?;

        self.handle_empty_response(response).await
    }
}
