//! Nectar Generator
//!
//! A scheduled worker that writes templated review articles from
//! marketplace product data.
//!
//! Architecture:
//! - Configuration: Load settings from environment
//! - Marketplace: External product search with bounded retry
//! - Templates: Deterministic review rendering
//! - Runner: Cycle scheduling and fallback handling
//!
//! Each cycle fetches products from the marketplace API when credentials
//! are configured, falling back to stored rows otherwise, and submits
//! one review article per product through the server API. Slug conflicts
//! are skips, so re-running never duplicates content.

mod config;
mod marketplace;
mod runner;
mod template;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::runner::GenerationLoop;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nectar_generator=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Nectar Generator");

    let config = Config::from_env()?;
    config.validate()?;

    info!(
        "Loaded configuration: server_url={}, categories={:?}, marketplace={}",
        config.server_url,
        config.categories,
        if config.marketplace.is_some() {
            "configured"
        } else {
            "fallback mode"
        }
    );

    let mut generation_loop = GenerationLoop::new(config)?;

    generation_loop.run().await
}
