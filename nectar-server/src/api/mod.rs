//! API Module
//!
//! HTTP API layer for the server.
//! Each submodule handles endpoints for a specific domain.

pub mod analytics;
pub mod article;
pub mod auth;
pub mod error;
pub mod health;
pub mod middleware;
pub mod product;
pub mod settings;

use std::sync::Arc;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
};
use sqlx::PgPool;
use tower_http::trace::TraceLayer;

use crate::config::Config;

/// Shared application state for handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(pool: PgPool, config: Config) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }
}

/// Create the main API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    // Admin routes require a valid bearer token
    let admin_routes = Router::new()
        // Product endpoints
        .route("/api/product/create", post(product::create_product))
        .route("/api/product/upsert", post(product::upsert_product))
        .route("/api/product/{id}", put(product::update_product))
        .route("/api/product/{id}", delete(product::delete_product))
        // Article endpoints
        .route("/api/article/create", post(article::create_article))
        .route("/api/article/{id}", put(article::update_article))
        .route("/api/article/{id}", delete(article::delete_article))
        .route("/api/article/{id}/publish", post(article::publish_article))
        // Analytics and settings
        .route("/api/analytics/summary", get(analytics::summary))
        .route("/api/settings/list", get(settings::list_settings))
        .route("/api/settings/{key}", put(settings::set_setting))
        .route_layer(from_fn_with_state(
            state.clone(),
            middleware::require_admin,
        ));

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Auth
        .route("/api/auth/login", post(auth::login))
        // Public product endpoints
        .route("/api/product/list", get(product::list_products))
        .route("/api/product/{id}", get(product::get_product))
        // Public article endpoints
        .route("/api/article/list", get(article::list_articles))
        .route("/api/article/slug/{slug}", get(article::get_article_by_slug))
        .route("/api/article/{id}", get(article::get_article))
        // Click tracking
        .route("/api/track/click", post(analytics::record_click))
        .merge(admin_routes)
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
