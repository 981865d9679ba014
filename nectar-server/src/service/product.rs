//! Product Service
//!
//! Business logic for product management.

use nectar_core::domain::product::Product;
use nectar_core::dto::product::{CreateProduct, ProductQuery, UpdateProduct};
use sqlx::PgPool;
use uuid::Uuid;

use crate::repository::{self, product_repository};

/// Service error type
#[derive(Debug)]
pub enum ProductError {
    NotFound(Uuid),
    /// Unique key (asin) already taken
    Conflict(String),
    ValidationError(String),
    DatabaseError(sqlx::Error),
}

impl From<sqlx::Error> for ProductError {
    fn from(err: sqlx::Error) -> Self {
        ProductError::DatabaseError(err)
    }
}

pub type Result<T> = std::result::Result<T, ProductError>;

/// Create a new product
pub async fn create_product(pool: &PgPool, req: CreateProduct) -> Result<Product> {
    validate_product_request(&req)?;

    let product = product_repository::create(pool, req).await.map_err(|e| {
        if repository::is_unique_violation(&e) {
            ProductError::Conflict("A product with this asin already exists".to_string())
        } else {
            ProductError::DatabaseError(e)
        }
    })?;

    tracing::info!("Product created: {} ({})", product.title, product.id);

    Ok(product)
}

/// Insert or refresh a product keyed on asin
pub async fn upsert_product(pool: &PgPool, req: CreateProduct) -> Result<Product> {
    validate_product_request(&req)?;

    let product = product_repository::upsert_by_asin(pool, req).await?;

    tracing::debug!("Product upserted: {} ({})", product.asin, product.id);

    Ok(product)
}

/// Get a product by ID
pub async fn get_product(pool: &PgPool, id: Uuid) -> Result<Product> {
    let product = product_repository::find_by_id(pool, id)
        .await?
        .ok_or(ProductError::NotFound(id))?;

    Ok(product)
}

/// List products
pub async fn list_products(pool: &PgPool, query: &ProductQuery) -> Result<Vec<Product>> {
    let products = product_repository::list(pool, query).await?;
    Ok(products)
}

/// Update a product
pub async fn update_product(pool: &PgPool, id: Uuid, req: UpdateProduct) -> Result<Product> {
    validate_product_update(&req)?;

    let updated = product_repository::update(pool, id, req).await?;

    if !updated {
        return Err(ProductError::NotFound(id));
    }

    get_product(pool, id).await
}

/// Delete a product
pub async fn delete_product(pool: &PgPool, id: Uuid) -> Result<()> {
    let deleted = product_repository::delete(pool, id).await?;

    if !deleted {
        return Err(ProductError::NotFound(id));
    }

    tracing::info!("Product deleted: {}", id);

    Ok(())
}

// =============================================================================
// Validation
// =============================================================================

fn validate_product_request(req: &CreateProduct) -> Result<()> {
    if req.asin.trim().is_empty() {
        return Err(ProductError::ValidationError(
            "Product asin cannot be empty".to_string(),
        ));
    }

    if req.asin.len() > 64 {
        return Err(ProductError::ValidationError(
            "Product asin is too long (max 64 characters)".to_string(),
        ));
    }

    if req.title.trim().is_empty() {
        return Err(ProductError::ValidationError(
            "Product title cannot be empty".to_string(),
        ));
    }

    if req.title.len() > 255 {
        return Err(ProductError::ValidationError(
            "Product title is too long (max 255 characters)".to_string(),
        ));
    }

    if req.category.trim().is_empty() {
        return Err(ProductError::ValidationError(
            "Product category cannot be empty".to_string(),
        ));
    }

    if req.price_cents < 0 {
        return Err(ProductError::ValidationError(
            "Product price cannot be negative".to_string(),
        ));
    }

    if let Some(rating) = req.rating {
        if !(0.0..=5.0).contains(&rating) {
            return Err(ProductError::ValidationError(
                "Product rating must be between 0 and 5".to_string(),
            ));
        }
    }

    Ok(())
}

fn validate_product_update(req: &UpdateProduct) -> Result<()> {
    if let Some(title) = &req.title {
        if title.trim().is_empty() || title.len() > 255 {
            return Err(ProductError::ValidationError(
                "Product title must be 1-255 characters".to_string(),
            ));
        }
    }

    if let Some(category) = &req.category {
        if category.trim().is_empty() {
            return Err(ProductError::ValidationError(
                "Product category cannot be empty".to_string(),
            ));
        }
    }

    if let Some(price) = req.price_cents {
        if price < 0 {
            return Err(ProductError::ValidationError(
                "Product price cannot be negative".to_string(),
            ));
        }
    }

    if let Some(rating) = req.rating {
        if !(0.0..=5.0).contains(&rating) {
            return Err(ProductError::ValidationError(
                "Product rating must be between 0 and 5".to_string(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nectar_core::domain::product::ProductSource;

    fn valid_request() -> CreateProduct {
        CreateProduct {
            asin: "B0TEST123".to_string(),
            title: "Wireless Headphones".to_string(),
            description: Some("Over-ear, 30h battery".to_string()),
            category: "electronics".to_string(),
            price_cents: 12999,
            currency: "USD".to_string(),
            rating: Some(4.4),
            review_count: Some(1203),
            image_url: None,
            source: ProductSource::Manual,
        }
    }

    #[test]
    fn test_validate_valid_request() {
        assert!(validate_product_request(&valid_request()).is_ok());
    }

    #[test]
    fn test_validate_empty_asin() {
        let mut req = valid_request();
        req.asin = "  ".to_string();
        let result = validate_product_request(&req);
        assert!(matches!(result, Err(ProductError::ValidationError(_))));
    }

    #[test]
    fn test_validate_negative_price() {
        let mut req = valid_request();
        req.price_cents = -1;
        let result = validate_product_request(&req);
        assert!(matches!(result, Err(ProductError::ValidationError(_))));
    }

    #[test]
    fn test_validate_rating_out_of_range() {
        let mut req = valid_request();
        req.rating = Some(5.5);
        let result = validate_product_request(&req);
        assert!(matches!(result, Err(ProductError::ValidationError(_))));
    }

    #[test]
    fn test_validate_update_rejects_empty_title() {
        let req = UpdateProduct {
            title: Some("".to_string()),
            ..Default::default()
        };
        let result = validate_product_update(&req);
        assert!(matches!(result, Err(ProductError::ValidationError(_))));
    }

    #[test]
    fn test_validate_update_allows_all_omitted() {
        assert!(validate_product_update(&UpdateProduct::default()).is_ok());
    }
}
