//! Article domain types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Published or draft site article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: Uuid,
    /// URL-safe identifier, unique across all articles
    pub slug: String,
    pub title: String,
    pub body_markdown: String,
    pub category: String,
    /// Product this article reviews, if any. Cleared when the product
    /// is deleted.
    pub product_id: Option<Uuid>,
    pub status: ArticleStatus,
    /// True for articles written by the content generator
    pub generated: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub published_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Article lifecycle state
///
/// Transitions are one-way: Draft -> Published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    Draft,
    Published,
}

impl ArticleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Draft => "draft",
            ArticleStatus::Published => "published",
        }
    }
}

impl std::str::FromStr for ArticleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(ArticleStatus::Draft),
            "published" => Ok(ArticleStatus::Published),
            other => Err(format!("unknown article status: {}", other)),
        }
    }
}
