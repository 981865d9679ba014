//! Article command handlers

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use nectar_client::NectarClient;
use nectar_core::domain::article::{Article, ArticleStatus};
use nectar_core::dto::article::ArticleQuery;
use uuid::Uuid;

use crate::config::Config;

/// Article subcommands
#[derive(Subcommand)]
pub enum ArticleCommands {
    /// List articles
    List {
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,

        /// Filter by status (draft or published)
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Get article details
    Get {
        /// Article ID
        id: String,

        /// Print the raw JSON representation
        #[arg(long)]
        json: bool,
    },
    /// Show an article by slug
    Show {
        /// Article slug
        slug: String,
    },
    /// Publish a draft article
    Publish {
        /// Article ID
        id: String,
    },
    /// Delete an article
    Delete {
        /// Article ID
        id: String,
    },
}

/// Handle article commands
pub async fn handle_article_command(command: ArticleCommands, config: &Config) -> Result<()> {
    let client = config.client();

    match command {
        ArticleCommands::List { category, status } => list_articles(&client, category, status).await,
        ArticleCommands::Get { id, json } => get_article(&client, &id, json).await,
        ArticleCommands::Show { slug } => show_article(&client, &slug).await,
        ArticleCommands::Publish { id } => publish_article(&client, &id).await,
        ArticleCommands::Delete { id } => delete_article(&client, &id).await,
    }
}

async fn list_articles(
    client: &NectarClient,
    category: Option<String>,
    status: Option<String>,
) -> Result<()> {
    let status = match status {
        Some(raw) => Some(
            raw.parse::<ArticleStatus>()
                .map_err(|e| anyhow::anyhow!(e))?,
        ),
        None => None,
    };

    let query = ArticleQuery { category, status };
    let articles = client.list_articles(&query).await?;

    if articles.is_empty() {
        println!("{}", "No articles found.".yellow());
    } else {
        println!("{}", format!("Found {} article(s):", articles.len()).bold());
        println!();
        for article in articles {
            print_article_summary(&article);
        }
    }

    Ok(())
}

async fn get_article(client: &NectarClient, id: &str, json: bool) -> Result<()> {
    let id = parse_id(id)?;
    let article = client.get_article(id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&article)?);
    } else {
        print_article(&article);
    }

    Ok(())
}

async fn show_article(client: &NectarClient, slug: &str) -> Result<()> {
    let article = client.get_article_by_slug(slug).await?;

    print_article(&article);

    Ok(())
}

async fn publish_article(client: &NectarClient, id: &str) -> Result<()> {
    let id = parse_id(id)?;
    let article = client.publish_article(id).await?;

    println!("{}", "✓ Article published".green().bold());
    println!("  Slug: {}", article.slug.cyan());

    Ok(())
}

async fn delete_article(client: &NectarClient, id: &str) -> Result<()> {
    let id = parse_id(id)?;
    client.delete_article(id).await?;

    println!("{}", "✓ Article deleted".green().bold());

    Ok(())
}

fn print_article_summary(article: &Article) {
    let status = match article.status {
        ArticleStatus::Published => "published".green(),
        ArticleStatus::Draft => "draft".yellow(),
    };

    println!(
        "{} {} {} {}",
        article.id.to_string().cyan(),
        article.title.bold(),
        format!("[{}]", article.category).dimmed(),
        status
    );
}

fn print_article(article: &Article) {
    println!("{}", article.title.bold());
    println!("  ID:       {}", article.id.to_string().cyan());
    println!("  Slug:     {}", article.slug);
    println!("  Category: {}", article.category);
    println!("  Status:   {}", article.status.as_str());
    if article.generated {
        println!("  {}", "(generated)".dimmed());
    }
    println!();
    println!("{}", article.body_markdown);
}

fn parse_id(raw: &str) -> Result<Uuid> {
    raw.parse()
        .with_context(|| format!("Invalid article ID: {}", raw))
}
