//! Article API Handlers
//!
//! HTTP endpoints for article management. Listing is public but only
//! shows published articles unless the caller presents an admin token.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
};
use nectar_core::domain::article::{Article, ArticleStatus};
use nectar_core::dto::article::{ArticleQuery, CreateArticle, UpdateArticle};
use uuid::Uuid;

use crate::api::error::{ApiError, ApiResult};
use crate::api::{AppState, middleware};
use crate::service::article_service;

fn map_error(e: article_service::ArticleError) -> ApiError {
    match e {
        article_service::ArticleError::NotFound(id) => {
            ApiError::NotFound(format!("Article {} not found", id))
        }
        article_service::ArticleError::SlugNotFound(slug) => {
            ApiError::NotFound(format!("Article '{}' not found", slug))
        }
        article_service::ArticleError::ProductNotFound(id) => {
            ApiError::NotFound(format!("Product {} not found", id))
        }
        article_service::ArticleError::Conflict(msg) => ApiError::Conflict(msg),
        article_service::ArticleError::ValidationError(msg) => ApiError::BadRequest(msg),
        article_service::ArticleError::InvalidState(msg) => ApiError::BadRequest(msg),
        article_service::ArticleError::DatabaseError(err) => ApiError::DatabaseError(err),
    }
}

/// POST /api/article/create
/// Create a new draft article
pub async fn create_article(
    State(state): State<AppState>,
    Json(req): Json<CreateArticle>,
) -> ApiResult<Json<Article>> {
    tracing::info!("Creating article: {}", req.slug);

    let article = article_service::create_article(&state.pool, req)
        .await
        .map_err(map_error)?;

    Ok(Json(article))
}

/// GET /api/article/list
/// List articles
///
/// Anonymous callers only see published articles; a valid admin token
/// unlocks drafts and arbitrary status filters.
pub async fn list_articles(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(mut query): Query<ArticleQuery>,
) -> ApiResult<Json<Vec<Article>>> {
    if !middleware::is_admin(&state, &headers) {
        query.status = Some(ArticleStatus::Published);
    }

    tracing::debug!("Listing articles");

    let articles = article_service::list_articles(&state.pool, &query)
        .await
        .map_err(map_error)?;

    Ok(Json(articles))
}

/// GET /api/article/{id}
/// Get article by ID
pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Article>> {
    tracing::debug!("Getting article: {}", id);

    let article = article_service::get_article(&state.pool, id)
        .await
        .map_err(map_error)?;

    Ok(Json(article))
}

/// GET /api/article/slug/{slug}
/// Get article by slug
pub async fn get_article_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<Article>> {
    tracing::debug!("Getting article by slug: {}", slug);

    let article = article_service::get_article_by_slug(&state.pool, &slug)
        .await
        .map_err(map_error)?;

    Ok(Json(article))
}

/// PUT /api/article/{id}
/// Update an article
pub async fn update_article(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateArticle>,
) -> ApiResult<Json<Article>> {
    tracing::info!("Updating article: {}", id);

    let article = article_service::update_article(&state.pool, id, req)
        .await
        .map_err(map_error)?;

    Ok(Json(article))
}

/// POST /api/article/{id}/publish
/// Publish a draft article
pub async fn publish_article(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Article>> {
    tracing::info!("Publishing article: {}", id);

    let article = article_service::publish_article(&state.pool, id)
        .await
        .map_err(map_error)?;

    Ok(Json(article))
}

/// DELETE /api/article/{id}
/// Delete an article
pub async fn delete_article(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    tracing::info!("Deleting article: {}", id);

    article_service::delete_article(&state.pool, id)
        .await
        .map_err(map_error)?;

    Ok(StatusCode::NO_CONTENT)
}
