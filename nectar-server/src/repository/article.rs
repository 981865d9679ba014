//! Article Repository
//!
//! Handles all database operations related to articles.

use nectar_core::domain::article::{Article, ArticleStatus};
use nectar_core::dto::article::{ArticleQuery, CreateArticle, UpdateArticle};
use sqlx::PgPool;
use uuid::Uuid;

/// Create a new draft article
pub async fn create(pool: &PgPool, req: CreateArticle) -> Result<Article, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = chrono::Utc::now();

    sqlx::query(
        r#"
        INSERT INTO articles (
            id, slug, title, body_markdown, category, product_id,
            status, generated, created_at, updated_at, published_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, NULL)
        "#,
    )
    .bind(id)
    .bind(&req.slug)
    .bind(&req.title)
    .bind(&req.body_markdown)
    .bind(&req.category)
    .bind(req.product_id)
    .bind(ArticleStatus::Draft.as_str())
    .bind(req.generated)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(Article {
        id,
        slug: req.slug,
        title: req.title,
        body_markdown: req.body_markdown,
        category: req.category,
        product_id: req.product_id,
        status: ArticleStatus::Draft,
        generated: req.generated,
        created_at: now,
        updated_at: now,
        published_at: None,
    })
}

/// Find an article by ID
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Article>, sqlx::Error> {
    let row = sqlx::query_as::<_, ArticleRow>(
        r#"
        SELECT id, slug, title, body_markdown, category, product_id,
               status, generated, created_at, updated_at, published_at
        FROM articles
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| r.into()))
}

/// Find an article by slug
pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Article>, sqlx::Error> {
    let row = sqlx::query_as::<_, ArticleRow>(
        r#"
        SELECT id, slug, title, body_markdown, category, product_id,
               status, generated, created_at, updated_at, published_at
        FROM articles
        WHERE slug = $1
        "#,
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| r.into()))
}

/// List articles, newest first, optionally filtered by category and status
pub async fn list(pool: &PgPool, query: &ArticleQuery) -> Result<Vec<Article>, sqlx::Error> {
    let status = query.status.map(|s| s.as_str());

    let rows = sqlx::query_as::<_, ArticleRow>(
        r#"
        SELECT id, slug, title, body_markdown, category, product_id,
               status, generated, created_at, updated_at, published_at
        FROM articles
        WHERE ($1::text IS NULL OR category = $1)
          AND ($2::text IS NULL OR status = $2)
        ORDER BY created_at DESC
        "#,
    )
    .bind(&query.category)
    .bind(status)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|r| r.into()).collect())
}

/// Apply a partial update to an article
pub async fn update(pool: &PgPool, id: Uuid, req: UpdateArticle) -> Result<bool, sqlx::Error> {
    let now = chrono::Utc::now();

    let result = sqlx::query(
        r#"
        UPDATE articles
        SET title = COALESCE($1, title),
            body_markdown = COALESCE($2, body_markdown),
            category = COALESCE($3, category),
            updated_at = $4
        WHERE id = $5
        "#,
    )
    .bind(&req.title)
    .bind(&req.body_markdown)
    .bind(&req.category)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Transition a draft article to published
///
/// Returns false when the article is missing or already published; the
/// WHERE clause carries the state check so the transition stays one-way
/// under concurrent requests.
pub async fn publish(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let now = chrono::Utc::now();

    let result = sqlx::query(
        r#"
        UPDATE articles
        SET status = $1, published_at = $2, updated_at = $2
        WHERE id = $3 AND status = $4
        "#,
    )
    .bind(ArticleStatus::Published.as_str())
    .bind(now)
    .bind(id)
    .bind(ArticleStatus::Draft.as_str())
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete an article by ID
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM articles WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

// =============================================================================
// Database Row Types
// =============================================================================

#[derive(sqlx::FromRow)]
struct ArticleRow {
    id: Uuid,
    slug: String,
    title: String,
    body_markdown: String,
    category: String,
    product_id: Option<Uuid>,
    status: String,
    generated: bool,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
    published_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        let status = row.status.parse().unwrap_or(ArticleStatus::Draft);

        Article {
            id: row.id,
            slug: row.slug,
            title: row.title,
            body_markdown: row.body_markdown,
            category: row.category,
            product_id: row.product_id,
            status,
            generated: row.generated,
            created_at: row.created_at,
            updated_at: row.updated_at,
            published_at: row.published_at,
        }
    }
}
