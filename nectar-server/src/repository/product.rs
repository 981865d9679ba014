//! Product Repository
//!
//! Handles all database operations related to products.

use nectar_core::domain::product::{Product, ProductSource};
use nectar_core::dto::product::{CreateProduct, ProductQuery, UpdateProduct};
use sqlx::PgPool;
use uuid::Uuid;

/// Create a new product in the database
pub async fn create(pool: &PgPool, req: CreateProduct) -> Result<Product, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = chrono::Utc::now();

    sqlx::query(
        r#"
        INSERT INTO products (
            id, asin, title, description, category, price_cents, currency,
            rating, review_count, image_url, source, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
        "#,
    )
    .bind(id)
    .bind(&req.asin)
    .bind(&req.title)
    .bind(&req.description)
    .bind(&req.category)
    .bind(req.price_cents)
    .bind(&req.currency)
    .bind(req.rating)
    .bind(req.review_count)
    .bind(&req.image_url)
    .bind(req.source.as_str())
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(Product {
        id,
        asin: req.asin,
        title: req.title,
        description: req.description,
        category: req.category,
        price_cents: req.price_cents,
        currency: req.currency,
        rating: req.rating,
        review_count: req.review_count,
        image_url: req.image_url,
        source: req.source,
        created_at: now,
        updated_at: now,
    })
}

/// Insert a product or refresh an existing row keyed on asin
///
/// Used by the generator after a marketplace fetch so fallback mode has
/// current data. `created_at` and `id` of an existing row are preserved.
pub async fn upsert_by_asin(pool: &PgPool, req: CreateProduct) -> Result<Product, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = chrono::Utc::now();

    let row = sqlx::query_as::<_, ProductRow>(
        r#"
        INSERT INTO products (
            id, asin, title, description, category, price_cents, currency,
            rating, review_count, image_url, source, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
        ON CONFLICT (asin) DO UPDATE SET
            title = EXCLUDED.title,
            description = EXCLUDED.description,
            category = EXCLUDED.category,
            price_cents = EXCLUDED.price_cents,
            currency = EXCLUDED.currency,
            rating = EXCLUDED.rating,
            review_count = EXCLUDED.review_count,
            image_url = EXCLUDED.image_url,
            source = EXCLUDED.source,
            updated_at = EXCLUDED.updated_at
        RETURNING id, asin, title, description, category, price_cents, currency,
                  rating, review_count, image_url, source, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&req.asin)
    .bind(&req.title)
    .bind(&req.description)
    .bind(&req.category)
    .bind(req.price_cents)
    .bind(&req.currency)
    .bind(req.rating)
    .bind(req.review_count)
    .bind(&req.image_url)
    .bind(req.source.as_str())
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(row.into())
}

/// Find a product by ID
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Product>, sqlx::Error> {
    let row = sqlx::query_as::<_, ProductRow>(
        r#"
        SELECT id, asin, title, description, category, price_cents, currency,
               rating, review_count, image_url, source, created_at, updated_at
        FROM products
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| r.into()))
}

/// List products, newest first, optionally filtered by category
pub async fn list(pool: &PgPool, query: &ProductQuery) -> Result<Vec<Product>, sqlx::Error> {
    let limit = query.limit.unwrap_or(100).clamp(1, 500);
    let offset = query.offset.unwrap_or(0).max(0);

    let rows = sqlx::query_as::<_, ProductRow>(
        r#"
        SELECT id, asin, title, description, category, price_cents, currency,
               rating, review_count, image_url, source, created_at, updated_at
        FROM products
        WHERE ($1::text IS NULL OR category = $1)
        ORDER BY created_at DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(&query.category)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|r| r.into()).collect())
}

/// Apply a partial update to a product
pub async fn update(pool: &PgPool, id: Uuid, req: UpdateProduct) -> Result<bool, sqlx::Error> {
    let now = chrono::Utc::now();

    let result = sqlx::query(
        r#"
        UPDATE products
        SET title = COALESCE($1, title),
            description = COALESCE($2, description),
            category = COALESCE($3, category),
            price_cents = COALESCE($4, price_cents),
            rating = COALESCE($5, rating),
            review_count = COALESCE($6, review_count),
            image_url = COALESCE($7, image_url),
            updated_at = $8
        WHERE id = $9
        "#,
    )
    .bind(&req.title)
    .bind(&req.description)
    .bind(&req.category)
    .bind(req.price_cents)
    .bind(req.rating)
    .bind(req.review_count)
    .bind(&req.image_url)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete a product by ID
///
/// Referencing articles keep a NULL product_id; click events cascade.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

// =============================================================================
// Database Row Types
// =============================================================================

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: Uuid,
    asin: String,
    title: String,
    description: Option<String>,
    category: String,
    price_cents: i64,
    currency: String,
    rating: Option<f64>,
    review_count: Option<i64>,
    image_url: Option<String>,
    source: String,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        let source = row.source.parse().unwrap_or(ProductSource::Manual);

        Product {
            id: row.id,
            asin: row.asin,
            title: row.title,
            description: row.description,
            category: row.category,
            price_cents: row.price_cents,
            currency: row.currency,
            rating: row.rating,
            review_count: row.review_count,
            image_url: row.image_url,
            source,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
