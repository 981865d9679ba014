//! Product command handlers

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use nectar_client::NectarClient;
use nectar_core::domain::product::{Product, ProductSource};
use nectar_core::dto::product::{CreateProduct, ProductQuery};
use uuid::Uuid;

use crate::config::Config;

/// Product subcommands
#[derive(Subcommand)]
pub enum ProductCommands {
    /// List products
    List {
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Get product details
    Get {
        /// Product ID
        id: String,

        /// Print the raw JSON representation
        #[arg(long)]
        json: bool,
    },
    /// Create a product
    Create {
        /// Marketplace item identifier
        #[arg(long)]
        asin: String,

        /// Product title
        #[arg(short, long)]
        title: String,

        /// Category
        #[arg(short, long)]
        category: String,

        /// Price in cents
        #[arg(short, long)]
        price_cents: i64,

        /// Description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Delete a product
    Delete {
        /// Product ID
        id: String,
    },
}

/// Handle product commands
pub async fn handle_product_command(command: ProductCommands, config: &Config) -> Result<()> {
    let client = config.client();

    match command {
        ProductCommands::List { category } => list_products(&client, category).await,
        ProductCommands::Get { id, json } => get_product(&client, &id, json).await,
        ProductCommands::Create {
            asin,
            title,
            category,
            price_cents,
            description,
        } => create_product(&client, asin, title, category, price_cents, description).await,
        ProductCommands::Delete { id } => delete_product(&client, &id).await,
    }
}

async fn list_products(client: &NectarClient, category: Option<String>) -> Result<()> {
    let query = ProductQuery {
        category,
        ..Default::default()
    };
    let products = client.list_products(&query).await?;

    if products.is_empty() {
        println!("{}", "No products found.".yellow());
    } else {
        println!("{}", format!("Found {} product(s):", products.len()).bold());
        println!();
        for product in products {
            print_product_summary(&product);
        }
    }

    Ok(())
}

async fn get_product(client: &NectarClient, id: &str, json: bool) -> Result<()> {
    let id = parse_id(id)?;
    let product = client.get_product(id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&product)?);
        return Ok(());
    }

    println!("{}", product.title.bold());
    println!("  ID:       {}", product.id.to_string().cyan());
    println!("  Asin:     {}", product.asin);
    println!("  Category: {}", product.category);
    println!(
        "  Price:    {}.{:02} {}",
        product.price_cents / 100,
        product.price_cents % 100,
        product.currency
    );
    if let Some(rating) = product.rating {
        println!("  Rating:   {:.1}/5", rating);
    }
    if let Some(description) = &product.description {
        println!("  Description: {}", description.dimmed());
    }

    Ok(())
}

async fn create_product(
    client: &NectarClient,
    asin: String,
    title: String,
    category: String,
    price_cents: i64,
    description: Option<String>,
) -> Result<()> {
    let req = CreateProduct {
        asin,
        title,
        description,
        category,
        price_cents,
        currency: "USD".to_string(),
        rating: None,
        review_count: None,
        image_url: None,
        source: ProductSource::Manual,
    };

    let product = client.create_product(req).await?;

    println!("{}", "✓ Product created".green().bold());
    println!("  ID:    {}", product.id.to_string().cyan());
    println!("  Title: {}", product.title.bold());

    Ok(())
}

async fn delete_product(client: &NectarClient, id: &str) -> Result<()> {
    let id = parse_id(id)?;
    client.delete_product(id).await?;

    println!("{}", "✓ Product deleted".green().bold());

    Ok(())
}

fn print_product_summary(product: &Product) {
    println!(
        "{} {} {}",
        product.id.to_string().cyan(),
        product.title.bold(),
        format!("[{}]", product.category).dimmed()
    );
}

fn parse_id(raw: &str) -> Result<Uuid> {
    raw.parse()
        .with_context(|| format!("Invalid product ID: {}", raw))
}
