//! Auth Service
//!
//! Login flow and seed admin creation.

use nectar_core::dto::auth::{LoginRequest, LoginResponse};
use sqlx::PgPool;

use crate::auth;
use crate::config::Config;
use crate::repository::user_repository;

/// Service error type
#[derive(Debug)]
pub enum AuthServiceError {
    /// Unknown user or wrong password; not distinguished on purpose
    InvalidCredentials,
    ValidationError(String),
    DatabaseError(sqlx::Error),
    InternalError(String),
}

impl From<sqlx::Error> for AuthServiceError {
    fn from(err: sqlx::Error) -> Self {
        AuthServiceError::DatabaseError(err)
    }
}

pub type Result<T> = std::result::Result<T, AuthServiceError>;

/// Authenticate an admin and issue a bearer token
pub async fn login(pool: &PgPool, config: &Config, req: LoginRequest) -> Result<LoginResponse> {
    validate_login_request(&req)?;

    let user = user_repository::find_by_username(pool, &req.username)
        .await?
        .ok_or(AuthServiceError::InvalidCredentials)?;

    let matches = auth::verify_password(&req.password, &user.password_hash)
        .map_err(|e| AuthServiceError::InternalError(e.to_string()))?;

    if !matches {
        return Err(AuthServiceError::InvalidCredentials);
    }

    let (token, expires_at) = auth::issue_token(
        &config.jwt_secret,
        user.id,
        &user.username,
        config.token_ttl_hours,
    )
    .map_err(|e| AuthServiceError::InternalError(e.to_string()))?;

    tracing::info!("Admin logged in: {}", user.username);

    Ok(LoginResponse { token, expires_at })
}

/// Create the seed admin from environment credentials
///
/// Only runs when the admin table is empty, so restarting the server
/// never resets a changed password.
pub async fn seed_admin_if_empty(pool: &PgPool, config: &Config) -> anyhow::Result<()> {
    let Some(seed) = &config.seed_admin else {
        return Ok(());
    };

    if user_repository::count(pool).await? > 0 {
        tracing::debug!("Admin accounts exist, skipping seed");
        return Ok(());
    }

    let hash = auth::hash_password(&seed.password)
        .map_err(|e| anyhow::anyhow!("failed to hash seed admin password: {}", e))?;

    let user = user_repository::create(pool, &seed.username, &hash).await?;

    tracing::info!("Seed admin created: {} ({})", user.username, user.id);

    Ok(())
}

// =============================================================================
// Validation
// =============================================================================

fn validate_login_request(req: &LoginRequest) -> Result<()> {
    if req.username.trim().is_empty() || req.username.len() > 255 {
        return Err(AuthServiceError::ValidationError(
            "Username must be 1-255 characters".to_string(),
        ));
    }

    if req.password.is_empty() {
        return Err(AuthServiceError::ValidationError(
            "Password cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_empty_username() {
        let req = LoginRequest {
            username: "".to_string(),
            password: "secret".to_string(),
        };
        let result = validate_login_request(&req);
        assert!(matches!(result, Err(AuthServiceError::ValidationError(_))));
    }

    #[test]
    fn test_validate_empty_password() {
        let req = LoginRequest {
            username: "admin".to_string(),
            password: "".to_string(),
        };
        let result = validate_login_request(&req);
        assert!(matches!(result, Err(AuthServiceError::ValidationError(_))));
    }

    #[test]
    fn test_validate_valid_request() {
        let req = LoginRequest {
            username: "admin".to_string(),
            password: "secret".to_string(),
        };
        assert!(validate_login_request(&req).is_ok());
    }
}
