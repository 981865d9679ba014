//! Generation loop
//!
//! Runs one generation cycle per interval tick. Each cycle acquires
//! product data (marketplace API first, stored rows as fallback),
//! renders review articles, and submits them. Cycle errors are logged
//! and never tear down the loop.

use anyhow::{Context as AnyhowContext, Result};
use nectar_client::{ClientError, NectarClient};
use nectar_core::domain::product::Product;
use nectar_core::dto::article::CreateArticle;
use nectar_core::dto::auth::LoginRequest;
use nectar_core::dto::product::ProductQuery;
use nectar_core::text::affiliate_url;
use tokio::time;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::marketplace::MarketplaceClient;
use crate::template::{self, RenderedArticle};

const DEFAULT_AFFILIATE_TAG: &str = "nectar-20";
const DEFAULT_STOREFRONT: &str = "https://www.example-market.com";

/// Content generation loop
pub struct GenerationLoop {
    config: Config,
    client: NectarClient,
    marketplace: Option<MarketplaceClient>,
}

/// Link-building context resolved once per cycle
struct LinkContext {
    partner_tag: String,
    storefront: String,
}

/// Outcome of one article create attempt
enum SubmitOutcome<T> {
    Created(T),
    /// Slug already taken; re-runs treat this as already written
    AlreadyExists,
    /// Token rejected; retry once after a fresh login
    AuthExpired,
    Failed(ClientError),
}

fn classify_submit<T>(result: std::result::Result<T, ClientError>) -> SubmitOutcome<T> {
    match result {
        Ok(value) => SubmitOutcome::Created(value),
        Err(e) if e.is_conflict() => SubmitOutcome::AlreadyExists,
        Err(e) if e.is_unauthorized() => SubmitOutcome::AuthExpired,
        Err(e) => SubmitOutcome::Failed(e),
    }
}

/// Keep a marketplace batch only when it actually has products
///
/// None (unconfigured or failed fetch) and empty batches both fall
/// through to the stored-product read.
fn usable_batch<T>(fetched: Option<Vec<T>>) -> Option<Vec<T>> {
    fetched.filter(|products| !products.is_empty())
}

impl GenerationLoop {
    /// Creates a new generation loop
    pub fn new(config: Config) -> Result<Self> {
        let client = NectarClient::new(config.server_url.clone());

        let marketplace = match &config.marketplace {
            Some(marketplace_config) => Some(MarketplaceClient::new(marketplace_config.clone())?),
            None => {
                info!("No marketplace credentials configured, running in fallback mode");
                None
            }
        };

        Ok(Self {
            config,
            client,
            marketplace,
        })
    }

    /// Starts the generation loop
    pub async fn run(&mut self) -> Result<()> {
        if self.config.run_once {
            info!("Running a single generation cycle");
            let created = self.run_cycle().await?;
            info!("Cycle complete, {} article(s) created", created);
            return Ok(());
        }

        info!(
            "Starting generation loop (interval: {:?})",
            self.config.interval
        );

        let mut interval = time::interval(self.config.interval);

        loop {
            interval.tick().await;

            debug!("Starting generation cycle");

            match self.run_cycle().await {
                Ok(created) => {
                    if created > 0 {
                        info!("Created {} article(s) this cycle", created);
                    }
                }
                Err(e) => {
                    error!("Error during generation cycle: {:#}", e);
                }
            }
        }
    }

    /// Performs a single generation cycle
    async fn run_cycle(&mut self) -> Result<usize> {
        // Tokens are short-lived relative to the cycle interval, so a
        // fresh login per cycle keeps every write authenticated
        self.login().await.context("Failed to authenticate")?;

        let links = self.resolve_link_context().await;
        let mut created = 0;

        for category in self.config.categories.clone() {
            let products = self.acquire_products(&category).await;

            if products.is_empty() {
                info!("No products available for category '{}'", category);
                continue;
            }

            debug!(
                "Generating articles for {} product(s) in '{}'",
                products.len(),
                category
            );

            for product in products {
                let link = affiliate_url(&links.storefront, &product.asin, &links.partner_tag);
                let rendered = template::render_review(&product, &link);

                match self.submit_article(rendered, &product, &category).await {
                    Ok(true) => created += 1,
                    Ok(false) => {}
                    Err(e) => {
                        warn!("Failed to submit article for {}: {:#}", product.asin, e);
                    }
                }
            }
        }

        Ok(created)
    }

    /// Authenticate against the server with the configured admin account
    async fn login(&mut self) -> Result<()> {
        let response = self
            .client
            .login(LoginRequest {
                username: self.config.admin_username.clone(),
                password: self.config.admin_password.clone(),
            })
            .await?;

        self.client.set_token(response.token);

        debug!("Authenticated, token valid until {}", response.expires_at);

        Ok(())
    }

    /// Acquire products for one category
    ///
    /// The marketplace attempt (when configured) strictly precedes the
    /// fallback read.
    async fn acquire_products(&self, category: &str) -> Vec<Product> {
        if let Some(products) = usable_batch(self.marketplace_products(category).await) {
            return products;
        }

        // Fallback mode: read what we already have
        self.stored_products(category).await
    }

    /// Fetch and persist fresh marketplace products for one category
    ///
    /// Returns None when the marketplace is not configured or the fetch
    /// failed after retries. Fetched products are upserted so fallback
    /// mode has current rows next time.
    async fn marketplace_products(&self, category: &str) -> Option<Vec<Product>> {
        let marketplace = self.marketplace.as_ref()?;

        match marketplace
            .search_products(category, self.config.products_per_category)
            .await
        {
            Ok(items) => {
                let mut products = Vec::new();

                for item in items {
                    match self.client.upsert_product(item).await {
                        Ok(product) => products.push(product),
                        Err(e) => warn!("Failed to upsert product: {}", e),
                    }
                }

                if products.is_empty() {
                    warn!(
                        "Marketplace returned no usable products for '{}', falling back",
                        category
                    );
                }

                Some(products)
            }
            Err(e) => {
                warn!(
                    "Marketplace fetch failed for '{}' ({}), falling back to stored products",
                    category, e
                );
                None
            }
        }
    }

    async fn stored_products(&self, category: &str) -> Vec<Product> {
        let query = ProductQuery {
            category: Some(category.to_string()),
            limit: Some(self.config.products_per_category as i64),
            offset: None,
        };

        match self.client.list_products(&query).await {
            Ok(products) => products,
            Err(e) => {
                error!("Failed to list stored products for '{}': {}", category, e);
                Vec::new()
            }
        }
    }

    /// Submit one rendered article
    ///
    /// Returns Ok(false) when the slug already exists: re-runs skip
    /// instead of duplicating. A 401 gets one re-login and retry in case
    /// the token expired mid-cycle.
    async fn submit_article(
        &mut self,
        rendered: RenderedArticle,
        product: &Product,
        category: &str,
    ) -> Result<bool> {
        let req = CreateArticle {
            slug: rendered.slug.clone(),
            title: rendered.title,
            body_markdown: rendered.body_markdown,
            category: category.to_string(),
            product_id: Some(product.id),
            generated: true,
        };

        let mut outcome = classify_submit(self.client.create_article(req.clone()).await);

        if let SubmitOutcome::AuthExpired = outcome {
            debug!("Token rejected mid-cycle, re-authenticating");
            self.login().await.context("Failed to re-authenticate")?;
            outcome = classify_submit(self.client.create_article(req).await);
        }

        let article = match outcome {
            SubmitOutcome::Created(article) => article,
            SubmitOutcome::AlreadyExists => {
                debug!("Article '{}' already exists, skipping", rendered.slug);
                return Ok(false);
            }
            SubmitOutcome::AuthExpired => {
                anyhow::bail!("article create rejected with 401 after re-authentication")
            }
            SubmitOutcome::Failed(e) => return Err(e.into()),
        };

        info!("Article created: {} ({})", article.slug, article.id);

        if self.config.auto_publish {
            if let Err(e) = self.client.publish_article(article.id).await {
                warn!("Failed to publish article {}: {}", article.id, e);
            }
        }

        Ok(true)
    }

    /// Resolve the affiliate tag and storefront base for link building
    ///
    /// The marketplace partner tag wins when configured; otherwise the
    /// `affiliate_tag` site setting, then a default. Settings are
    /// admin-only, so a failed read just means defaults.
    async fn resolve_link_context(&self) -> LinkContext {
        let mut partner_tag = self
            .marketplace
            .as_ref()
            .map(|m| m.partner_tag().to_string());
        let mut storefront = None;

        match self.client.list_settings().await {
            Ok(settings) => {
                for setting in settings {
                    match setting.key.as_str() {
                        "affiliate_tag" if partner_tag.is_none() => {
                            partner_tag = Some(setting.value);
                        }
                        "storefront_url" => storefront = Some(setting.value),
                        _ => {}
                    }
                }
            }
            Err(e) => {
                debug!("Could not read site settings ({}), using defaults", e);
            }
        }

        LinkContext {
            partner_tag: partner_tag.unwrap_or_else(|| DEFAULT_AFFILIATE_TAG.to_string()),
            storefront: storefront.unwrap_or_else(|| DEFAULT_STOREFRONT.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_marketplace_falls_back() {
        // No marketplace client at all -> stored-product path
        assert!(usable_batch::<i32>(None).is_none());
    }

    #[test]
    fn test_empty_marketplace_batch_falls_back() {
        assert!(usable_batch(Some(Vec::<i32>::new())).is_none());
    }

    #[test]
    fn test_marketplace_batch_precedes_fallback() {
        assert_eq!(usable_batch(Some(vec![1, 2])), Some(vec![1, 2]));
    }

    #[test]
    fn test_slug_conflict_is_a_skip() {
        let outcome = classify_submit::<()>(Err(ClientError::api_error(409, "slug exists")));
        assert!(matches!(outcome, SubmitOutcome::AlreadyExists));
    }

    #[test]
    fn test_unauthorized_triggers_reauth() {
        let outcome = classify_submit::<()>(Err(ClientError::api_error(401, "token expired")));
        assert!(matches!(outcome, SubmitOutcome::AuthExpired));
    }

    #[test]
    fn test_other_errors_propagate() {
        let outcome = classify_submit::<()>(Err(ClientError::api_error(500, "boom")));
        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    }

    #[test]
    fn test_success_passes_through() {
        let outcome = classify_submit(Ok(7));
        assert!(matches!(outcome, SubmitOutcome::Created(7)));
    }
}
