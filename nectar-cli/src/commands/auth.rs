//! Auth command handlers

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use nectar_core::dto::auth::LoginRequest;

use crate::config::{self, Config};

/// Auth subcommands
#[derive(Subcommand)]
pub enum AuthCommands {
    /// Log in and store the admin token
    Login {
        /// Admin username
        #[arg(short, long)]
        username: String,

        /// Admin password
        #[arg(short, long, env = "NECTAR_ADMIN_PASSWORD")]
        password: String,
    },
}

/// Handle auth commands
pub async fn handle_auth_command(command: AuthCommands, config: &Config) -> Result<()> {
    match command {
        AuthCommands::Login { username, password } => login(config, username, password).await,
    }
}

async fn login(config: &Config, username: String, password: String) -> Result<()> {
    let client = config.client();

    let response = client.login(LoginRequest { username, password }).await?;

    config::save_token(&response.token)?;

    println!("{}", "✓ Logged in".green().bold());
    println!(
        "  Token valid until {}",
        response.expires_at.to_rfc3339().dimmed()
    );

    Ok(())
}
