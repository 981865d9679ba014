//! Analytics command handlers

use anyhow::Result;
use clap::Subcommand;
use colored::*;

use crate::config::Config;

/// Analytics subcommands
#[derive(Subcommand)]
pub enum AnalyticsCommands {
    /// Per-product click counts
    Summary {
        /// Trailing window in days
        #[arg(short, long)]
        days: Option<i64>,
    },
}

/// Handle analytics commands
pub async fn handle_analytics_command(command: AnalyticsCommands, config: &Config) -> Result<()> {
    let client = config.client();

    match command {
        AnalyticsCommands::Summary { days } => {
            let rows = client.analytics_summary(days).await?;

            if rows.is_empty() {
                println!("{}", "No clicks recorded in this window.".yellow());
                return Ok(());
            }

            println!(
                "{}",
                format!("Clicks over the last {} day(s):", days.unwrap_or(30)).bold()
            );
            println!();
            for row in rows {
                println!(
                    "{:>6}  {} {}",
                    row.clicks.to_string().bold(),
                    row.product_title,
                    row.product_id.to_string().dimmed()
                );
            }

            Ok(())
        }
    }
}
