//! Configuration module
//!
//! Handles CLI configuration including the server URL and the stored
//! admin token. The token is written by `nectar auth login` and read
//! implicitly by admin commands.

use anyhow::{Context, Result};
use nectar_client::NectarClient;
use std::path::PathBuf;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the Nectar server
    pub server_url: String,
}

impl Config {
    /// Build a client, attaching the stored admin token if present
    pub fn client(&self) -> NectarClient {
        let client = NectarClient::new(&self.server_url);

        match load_token() {
            Some(token) => client.with_token(token),
            None => client,
        }
    }
}

/// Path of the persisted token file
fn token_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("nectar").join("token"))
}

/// Read the stored admin token, if any
pub fn load_token() -> Option<String> {
    let path = token_path()?;
    let token = std::fs::read_to_string(path).ok()?;
    let token = token.trim().to_string();

    if token.is_empty() { None } else { Some(token) }
}

/// Persist the admin token after a successful login
pub fn save_token(token: &str) -> Result<()> {
    let path = token_path().context("Could not determine config directory")?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    std::fs::write(&path, token).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}
