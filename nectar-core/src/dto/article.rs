//! Article DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::article::ArticleStatus;

/// Request to create a new article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateArticle {
    pub slug: String,
    pub title: String,
    pub body_markdown: String,
    pub category: String,
    #[serde(default)]
    pub product_id: Option<Uuid>,
    /// Marks articles written by the content generator
    #[serde(default)]
    pub generated: bool,
}

/// Request to update an existing article
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateArticle {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body_markdown: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Query parameters for article listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticleQuery {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<ArticleStatus>,
}
