//! Settings command handlers

use anyhow::Result;
use clap::Subcommand;
use colored::*;

use crate::config::Config;

/// Settings subcommands
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// List all site settings
    List,
    /// Set a site setting
    Set {
        /// Setting key (e.g. affiliate_tag)
        key: String,

        /// Setting value
        value: String,
    },
}

/// Handle settings commands
pub async fn handle_settings_command(command: SettingsCommands, config: &Config) -> Result<()> {
    let client = config.client();

    match command {
        SettingsCommands::List => {
            let settings = client.list_settings().await?;

            if settings.is_empty() {
                println!("{}", "No settings defined.".yellow());
                return Ok(());
            }

            for setting in settings {
                println!("{} = {}", setting.key.cyan(), setting.value);
            }

            Ok(())
        }
        SettingsCommands::Set { key, value } => {
            let setting = client.set_setting(&key, value).await?;

            println!("{}", "✓ Setting updated".green().bold());
            println!("  {} = {}", setting.key.cyan(), setting.value);

            Ok(())
        }
    }
}
