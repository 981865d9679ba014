//! Product API Handlers
//!
//! HTTP endpoints for product management.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use nectar_core::domain::product::Product;
use nectar_core::dto::product::{CreateProduct, ProductQuery, UpdateProduct};
use uuid::Uuid;

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};
use crate::service::product_service;

fn map_error(e: product_service::ProductError) -> ApiError {
    match e {
        product_service::ProductError::NotFound(id) => {
            ApiError::NotFound(format!("Product {} not found", id))
        }
        product_service::ProductError::Conflict(msg) => ApiError::Conflict(msg),
        product_service::ProductError::ValidationError(msg) => ApiError::BadRequest(msg),
        product_service::ProductError::DatabaseError(err) => ApiError::DatabaseError(err),
    }
}

/// POST /api/product/create
/// Create a new product
pub async fn create_product(
    State(state): State<AppState>,
    Json(req): Json<CreateProduct>,
) -> ApiResult<Json<Product>> {
    tracing::info!("Creating product: {}", req.asin);

    let product = product_service::create_product(&state.pool, req)
        .await
        .map_err(map_error)?;

    Ok(Json(product))
}

/// POST /api/product/upsert
/// Insert or refresh a product keyed on asin
pub async fn upsert_product(
    State(state): State<AppState>,
    Json(req): Json<CreateProduct>,
) -> ApiResult<Json<Product>> {
    tracing::debug!("Upserting product: {}", req.asin);

    let product = product_service::upsert_product(&state.pool, req)
        .await
        .map_err(map_error)?;

    Ok(Json(product))
}

/// GET /api/product/list
/// List products, optionally filtered by category
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> ApiResult<Json<Vec<Product>>> {
    tracing::debug!("Listing products");

    let products = product_service::list_products(&state.pool, &query)
        .await
        .map_err(map_error)?;

    Ok(Json(products))
}

/// GET /api/product/{id}
/// Get product by ID
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Product>> {
    tracing::debug!("Getting product: {}", id);

    let product = product_service::get_product(&state.pool, id)
        .await
        .map_err(map_error)?;

    Ok(Json(product))
}

/// PUT /api/product/{id}
/// Update a product
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateProduct>,
) -> ApiResult<Json<Product>> {
    tracing::info!("Updating product: {}", id);

    let product = product_service::update_product(&state.pool, id, req)
        .await
        .map_err(map_error)?;

    Ok(Json(product))
}

/// DELETE /api/product/{id}
/// Delete a product
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    tracing::info!("Deleting product: {}", id);

    product_service::delete_product(&state.pool, id)
        .await
        .map_err(map_error)?;

    Ok(StatusCode::NO_CONTENT)
}
