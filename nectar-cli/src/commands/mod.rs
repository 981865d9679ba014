//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod analytics;
mod article;
mod auth;
mod product;
mod settings;

pub use analytics::AnalyticsCommands;
pub use article::ArticleCommands;
pub use auth::AuthCommands;
pub use product::ProductCommands;
pub use settings::SettingsCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Authentication
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },
    /// Product management
    Product {
        #[command(subcommand)]
        command: ProductCommands,
    },
    /// Article management
    Article {
        #[command(subcommand)]
        command: ArticleCommands,
    },
    /// Click analytics
    Analytics {
        #[command(subcommand)]
        command: AnalyticsCommands,
    },
    /// Site settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Auth { command } => auth::handle_auth_command(command, config).await,
        Commands::Product { command } => product::handle_product_command(command, config).await,
        Commands::Article { command } => article::handle_article_command(command, config).await,
        Commands::Analytics { command } => {
            analytics::handle_analytics_command(command, config).await
        }
        Commands::Settings { command } => settings::handle_settings_command(command, config).await,
    }
}
