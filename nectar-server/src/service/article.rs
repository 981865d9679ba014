//! Article Service
//!
//! Business logic for article management, including the one-way
//! draft -> published transition.

use nectar_core::domain::article::{Article, ArticleStatus};
use nectar_core::dto::article::{ArticleQuery, CreateArticle, UpdateArticle};
use nectar_core::text;
use sqlx::PgPool;
use uuid::Uuid;

use crate::repository::{self, article_repository, product_repository};

/// Service error type
#[derive(Debug)]
pub enum ArticleError {
    NotFound(Uuid),
    SlugNotFound(String),
    ProductNotFound(Uuid),
    /// Slug already taken; generation relies on this to stay idempotent
    Conflict(String),
    ValidationError(String),
    InvalidState(String),
    DatabaseError(sqlx::Error),
}

impl From<sqlx::Error> for ArticleError {
    fn from(err: sqlx::Error) -> Self {
        ArticleError::DatabaseError(err)
    }
}

pub type Result<T> = std::result::Result<T, ArticleError>;

/// Create a new draft article
pub async fn create_article(pool: &PgPool, req: CreateArticle) -> Result<Article> {
    validate_article_request(&req)?;

    // Referenced product must exist up front; the FK would reject it
    // anyway but this gives the caller a 404 instead of a 500
    if let Some(product_id) = req.product_id {
        product_repository::find_by_id(pool, product_id)
            .await?
            .ok_or(ArticleError::ProductNotFound(product_id))?;
    }

    let article = article_repository::create(pool, req).await.map_err(|e| {
        if repository::is_unique_violation(&e) {
            ArticleError::Conflict("An article with this slug already exists".to_string())
        } else {
            ArticleError::DatabaseError(e)
        }
    })?;

    tracing::info!("Article created: {} ({})", article.slug, article.id);

    Ok(article)
}

/// Get an article by ID
pub async fn get_article(pool: &PgPool, id: Uuid) -> Result<Article> {
    let article = article_repository::find_by_id(pool, id)
        .await?
        .ok_or(ArticleError::NotFound(id))?;

    Ok(article)
}

/// Get an article by slug
pub async fn get_article_by_slug(pool: &PgPool, slug: &str) -> Result<Article> {
    let article = article_repository::find_by_slug(pool, slug)
        .await?
        .ok_or_else(|| ArticleError::SlugNotFound(slug.to_string()))?;

    Ok(article)
}

/// List articles
pub async fn list_articles(pool: &PgPool, query: &ArticleQuery) -> Result<Vec<Article>> {
    let articles = article_repository::list(pool, query).await?;
    Ok(articles)
}

/// Update an article
pub async fn update_article(pool: &PgPool, id: Uuid, req: UpdateArticle) -> Result<Article> {
    validate_article_update(&req)?;

    let updated = article_repository::update(pool, id, req).await?;

    if !updated {
        return Err(ArticleError::NotFound(id));
    }

    get_article(pool, id).await
}

/// Publish a draft article
pub async fn publish_article(pool: &PgPool, id: Uuid) -> Result<Article> {
    let article = get_article(pool, id).await?;

    if article.status == ArticleStatus::Published {
        return Err(ArticleError::InvalidState(
            "Article is already published".to_string(),
        ));
    }

    let published = article_repository::publish(pool, id).await?;

    if !published {
        // Lost a race with another publish; the state check above passed
        return Err(ArticleError::InvalidState(
            "Article is already published".to_string(),
        ));
    }

    tracing::info!("Article published: {}", id);

    get_article(pool, id).await
}

/// Delete an article
pub async fn delete_article(pool: &PgPool, id: Uuid) -> Result<()> {
    let deleted = article_repository::delete(pool, id).await?;

    if !deleted {
        return Err(ArticleError::NotFound(id));
    }

    tracing::info!("Article deleted: {}", id);

    Ok(())
}

// =============================================================================
// Validation
// =============================================================================

fn validate_article_request(req: &CreateArticle) -> Result<()> {
    if !text::is_valid_slug(&req.slug) {
        return Err(ArticleError::ValidationError(
            "Article slug must be lowercase alphanumerics and single hyphens".to_string(),
        ));
    }

    if req.title.trim().is_empty() {
        return Err(ArticleError::ValidationError(
            "Article title cannot be empty".to_string(),
        ));
    }

    if req.title.len() > 255 {
        return Err(ArticleError::ValidationError(
            "Article title is too long (max 255 characters)".to_string(),
        ));
    }

    if req.body_markdown.trim().is_empty() {
        return Err(ArticleError::ValidationError(
            "Article body cannot be empty".to_string(),
        ));
    }

    if req.category.trim().is_empty() {
        return Err(ArticleError::ValidationError(
            "Article category cannot be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_article_update(req: &UpdateArticle) -> Result<()> {
    if let Some(title) = &req.title {
        if title.trim().is_empty() || title.len() > 255 {
            return Err(ArticleError::ValidationError(
                "Article title must be 1-255 characters".to_string(),
            ));
        }
    }

    if let Some(body) = &req.body_markdown {
        if body.trim().is_empty() {
            return Err(ArticleError::ValidationError(
                "Article body cannot be empty".to_string(),
            ));
        }
    }

    if let Some(category) = &req.category {
        if category.trim().is_empty() {
            return Err(ArticleError::ValidationError(
                "Article category cannot be empty".to_string(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateArticle {
        CreateArticle {
            slug: "wireless-headphones-review".to_string(),
            title: "Wireless Headphones Review".to_string(),
            body_markdown: "## Verdict\n\nGood value.".to_string(),
            category: "electronics".to_string(),
            product_id: None,
            generated: false,
        }
    }

    #[test]
    fn test_validate_valid_request() {
        assert!(validate_article_request(&valid_request()).is_ok());
    }

    #[test]
    fn test_validate_bad_slug() {
        let mut req = valid_request();
        req.slug = "Not A Slug".to_string();
        let result = validate_article_request(&req);
        assert!(matches!(result, Err(ArticleError::ValidationError(_))));
    }

    #[test]
    fn test_validate_empty_body() {
        let mut req = valid_request();
        req.body_markdown = "   ".to_string();
        let result = validate_article_request(&req);
        assert!(matches!(result, Err(ArticleError::ValidationError(_))));
    }

    #[test]
    fn test_validate_empty_category() {
        let mut req = valid_request();
        req.category = "".to_string();
        let result = validate_article_request(&req);
        assert!(matches!(result, Err(ArticleError::ValidationError(_))));
    }

    #[test]
    fn test_validate_update_rejects_empty_body() {
        let req = UpdateArticle {
            body_markdown: Some("".to_string()),
            ..Default::default()
        };
        let result = validate_article_update(&req);
        assert!(matches!(result, Err(ArticleError::ValidationError(_))));
    }
}
