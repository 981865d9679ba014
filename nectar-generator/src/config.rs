//! Generator configuration
//!
//! Defines all configurable parameters for the content generator
//! including the generation interval, target categories, and optional
//! marketplace API credentials. When the marketplace credentials are
//! absent the generator runs permanently in fallback mode, reading
//! stored products instead of calling the external API.

use std::time::Duration;

/// Generator configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Nectar server base URL (e.g., "http://localhost:8080")
    pub server_url: String,

    /// Admin credentials used to authenticate against the server
    pub admin_username: String,
    pub admin_password: String,

    /// Categories to generate review articles for
    pub categories: Vec<String>,

    /// How often to run a generation cycle
    pub interval: Duration,

    /// Run a single cycle and exit (cron-style invocation)
    pub run_once: bool,

    /// Products fetched per category per cycle
    pub products_per_category: usize,

    /// Publish generated articles immediately instead of leaving drafts
    pub auto_publish: bool,

    /// Marketplace API credentials; None switches on fallback mode
    pub marketplace: Option<MarketplaceConfig>,
}

/// External marketplace API settings
#[derive(Debug, Clone)]
pub struct MarketplaceConfig {
    /// API endpoint base (e.g., "https://api.example-market.com")
    pub endpoint: String,
    pub access_key: String,
    /// Affiliate partner tag carried on outbound links
    pub partner_tag: String,
}

impl Config {
    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - NECTAR_SERVER_URL (optional, default: http://localhost:8080)
    /// - NECTAR_ADMIN_USERNAME / NECTAR_ADMIN_PASSWORD (required)
    /// - GENERATOR_CATEGORIES (optional, comma-separated, default: electronics)
    /// - GENERATOR_INTERVAL (optional, seconds, default: 3600)
    /// - GENERATOR_RUN_ONCE (optional, "1" to run a single cycle)
    /// - GENERATOR_PRODUCTS_PER_CATEGORY (optional, default: 10)
    /// - GENERATOR_AUTO_PUBLISH (optional, "1" to publish immediately)
    /// - MARKETPLACE_ENDPOINT / MARKETPLACE_ACCESS_KEY / MARKETPLACE_PARTNER_TAG
    ///   (all three required to enable marketplace fetching)
    pub fn from_env() -> anyhow::Result<Self> {
        let server_url = std::env::var("NECTAR_SERVER_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());

        let admin_username = std::env::var("NECTAR_ADMIN_USERNAME")
            .map_err(|_| anyhow::anyhow!("NECTAR_ADMIN_USERNAME environment variable not set"))?;

        let admin_password = std::env::var("NECTAR_ADMIN_PASSWORD")
            .map_err(|_| anyhow::anyhow!("NECTAR_ADMIN_PASSWORD environment variable not set"))?;

        let categories = std::env::var("GENERATOR_CATEGORIES")
            .map(|s| parse_categories(&s))
            .unwrap_or_else(|_| vec!["electronics".to_string()]);

        let interval = std::env::var("GENERATOR_INTERVAL")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(3600));

        let run_once = std::env::var("GENERATOR_RUN_ONCE")
            .map(|s| s == "1")
            .unwrap_or(false);

        let products_per_category = std::env::var("GENERATOR_PRODUCTS_PER_CATEGORY")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(10);

        let auto_publish = std::env::var("GENERATOR_AUTO_PUBLISH")
            .map(|s| s == "1")
            .unwrap_or(false);

        // Marketplace fetching is only enabled when the full credential
        // set is present; anything less means fallback mode
        let marketplace = match (
            std::env::var("MARKETPLACE_ACCESS_KEY"),
            std::env::var("MARKETPLACE_PARTNER_TAG"),
        ) {
            (Ok(access_key), Ok(partner_tag)) => Some(MarketplaceConfig {
                endpoint: std::env::var("MARKETPLACE_ENDPOINT")
                    .unwrap_or_else(|_| "https://api.example-market.com".to_string()),
                access_key,
                partner_tag,
            }),
            _ => None,
        };

        Ok(Self {
            server_url,
            admin_username,
            admin_password,
            categories,
            interval,
            run_once,
            products_per_category,
            auto_publish,
            marketplace,
        })
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.server_url.starts_with("http://") && !self.server_url.starts_with("https://") {
            anyhow::bail!("server_url must start with http:// or https://");
        }

        if self.admin_username.is_empty() {
            anyhow::bail!("admin_username cannot be empty");
        }

        if self.categories.is_empty() {
            anyhow::bail!("at least one category is required");
        }

        if self.interval.as_secs() == 0 {
            anyhow::bail!("interval must be greater than 0");
        }

        if self.products_per_category == 0 {
            anyhow::bail!("products_per_category must be greater than 0");
        }

        if let Some(marketplace) = &self.marketplace {
            if marketplace.access_key.is_empty() {
                anyhow::bail!("marketplace access_key cannot be empty");
            }
            if marketplace.partner_tag.is_empty() {
                anyhow::bail!("marketplace partner_tag cannot be empty");
            }
        }

        Ok(())
    }
}

fn parse_categories(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            server_url: "http://localhost:8080".to_string(),
            admin_username: "admin".to_string(),
            admin_password: "secret".to_string(),
            categories: vec!["electronics".to_string()],
            interval: Duration::from_secs(3600),
            run_once: false,
            products_per_category: 10,
            auto_publish: false,
            marketplace: None,
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(test_config().validate().is_ok());
    }

    #[test]
    fn test_invalid_server_url() {
        let mut config = test_config();
        config.server_url = "not-a-url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_categories_rejected() {
        let mut config = test_config();
        config.categories.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_partner_tag_rejected() {
        let mut config = test_config();
        config.marketplace = Some(MarketplaceConfig {
            endpoint: "https://api.example-market.com".to_string(),
            access_key: "key".to_string(),
            partner_tag: "".to_string(),
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_categories() {
        assert_eq!(
            parse_categories("electronics, home , ,kitchen"),
            vec!["electronics", "home", "kitchen"]
        );
        assert!(parse_categories("  ").is_empty());
    }
}
