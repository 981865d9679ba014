//! Site Settings Service

use nectar_core::domain::settings::SiteSetting;
use sqlx::PgPool;

use crate::repository::settings_repository;

/// Service error type
#[derive(Debug)]
pub enum SettingsError {
    ValidationError(String),
    DatabaseError(sqlx::Error),
}

impl From<sqlx::Error> for SettingsError {
    fn from(err: sqlx::Error) -> Self {
        SettingsError::DatabaseError(err)
    }
}

pub type Result<T> = std::result::Result<T, SettingsError>;

/// Set a site setting
pub async fn set_setting(pool: &PgPool, key: &str, value: &str) -> Result<SiteSetting> {
    validate_key(key)?;

    if value.len() > 4096 {
        return Err(SettingsError::ValidationError(
            "Setting value is too long (max 4096 characters)".to_string(),
        ));
    }

    let setting = settings_repository::upsert(pool, key, value).await?;

    tracing::info!("Setting updated: {}", key);

    Ok(setting)
}

/// List all site settings
pub async fn list_settings(pool: &PgPool) -> Result<Vec<SiteSetting>> {
    let settings = settings_repository::list(pool).await?;
    Ok(settings)
}

// =============================================================================
// Validation
// =============================================================================

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() || key.len() > 128 {
        return Err(SettingsError::ValidationError(
            "Setting key must be 1-128 characters".to_string(),
        ));
    }

    if !key
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    {
        return Err(SettingsError::ValidationError(
            "Setting key must be lowercase alphanumerics and underscores".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key() {
        assert!(validate_key("affiliate_tag").is_ok());
        assert!(validate_key("site_title").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("Has-Upper").is_err());
        assert!(validate_key("with space").is_err());
    }
}
