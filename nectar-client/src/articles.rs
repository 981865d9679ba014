//! Article-related API endpoints

use crate::NectarClient;
use crate::error::Result;
use nectar_core::domain::article::Article;
use nectar_core::dto::article::{ArticleQuery, CreateArticle, UpdateArticle};
use uuid::Uuid;

impl NectarClient {
    // =============================================================================
    // Article Lifecycle
    // =============================================================================

    /// Create a new draft article (admin)
    ///
    /// Returns a conflict error when the slug is already taken; callers
    /// that generate articles treat that as "already written".
    pub async fn create_article(&self, req: CreateArticle) -> Result<Article> {
        let url = format!("{}/api/article/create", self.base_url);
        let response = self.authorize(self.client.post(&url)).json(&req).send().await?;

        self.handle_response(response).await
    }

    /// List articles
    ///
    /// The token, when set, is sent along so draft articles are included.
    pub async fn list_articles(&self, query: &ArticleQuery) -> Result<Vec<Article>> {
        let url = format!("{}/api/article/list", self.base_url);
        let response = self.authorize(self.client.get(&url)).query(query).send().await?;

        self.handle_response(response).await
    }

    /// Get an article by ID
    pub async fn get_article(&self, article_id: Uuid) -> Result<Article> {
        let url = format!("{}/api/article/{}", self.base_url, article_id);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Get an article by slug
    pub async fn get_article_by_slug(&self, slug: &str) -> Result<Article> {
        let url = format!("{}/api/article/slug/{}", self.base_url, slug);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Update an article (admin)
    pub async fn update_article(&self, article_id: Uuid, req: UpdateArticle) -> Result<Article> {
        let url = format!("{}/api/article/{}", self.base_url, article_id);
        let response = self.authorize(self.client.put(&url)).json(&req).send().await?;

        self.handle_response(response).await
    }

    /// Publish a draft article (admin)
    pub async fn publish_article(&self, article_id: Uuid) -> Result<Article> {
        let url = format!("{}/api/article/{}/publish", self.base_url, article_id);
        let response = self.authorize(self.client.post(&url)).send().await?;

        self.handle_response(response).await
    }

    /// Delete an article (admin)
    pub async fn delete_article(&self, article_id: Uuid) -> Result<()> {
        let url = format!("{}/api/article/{}", self.base_url, article_id);
        let response = self.authorize(self.client.delete(&url)).send().await?;

        self.handle_empty_response(response).await
    }
}
