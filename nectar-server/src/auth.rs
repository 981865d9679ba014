//! Password hashing and bearer token handling
//!
//! Passwords are hashed with Argon2id; tokens are HS256 JWTs carrying
//! the admin's id and username. Verification failures collapse into a
//! single error variant so handlers can map everything to 401 without
//! leaking which check failed.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token claims for an authenticated admin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Admin user id
    pub sub: Uuid,
    pub username: String,
    /// Issued-at, seconds since epoch
    pub iat: i64,
    /// Expiry, seconds since epoch
    pub exp: i64,
}

#[derive(Debug)]
pub enum AuthError {
    /// Token missing, malformed, expired, or signed with the wrong key
    InvalidToken,
    /// Password hash could not be produced or parsed
    HashError(String),
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::InvalidToken => write!(f, "invalid or expired token"),
            AuthError::HashError(msg) => write!(f, "password hash error: {}", msg),
        }
    }
}

impl std::error::Error for AuthError {}

/// Hash a password for storage
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AuthError::HashError(e.to_string()))
}

/// Verify a password against a stored hash
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| AuthError::HashError(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Issue a signed token for an admin
///
/// Returns the encoded token and its expiry timestamp.
pub fn issue_token(
    secret: &str,
    user_id: Uuid,
    username: &str,
    ttl_hours: i64,
) -> Result<(String, chrono::DateTime<chrono::Utc>), AuthError> {
    let now = chrono::Utc::now();
    let expires_at = now + chrono::Duration::hours(ttl_hours);

    let claims = Claims {
        sub: user_id,
        username: username.to_string(),
        iat: now.timestamp(),
        exp: expires_at.timestamp(),
    };

    let token = jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| AuthError::InvalidToken)?;

    Ok((token, expires_at))
}

/// Verify a bearer token and return its claims
pub fn verify_token(secret: &str, token: &str) -> Result<Claims, AuthError> {
    let data = jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AuthError::InvalidToken)?;

    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    #[test]
    fn test_password_hash_roundtrip() {
        let hash = hash_password("hunter2hunter2").unwrap();
        assert!(verify_password("hunter2hunter2", &hash).unwrap());
        assert!(!verify_password("wrong-password", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("same-password").unwrap();
        let b = hash_password("same-password").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_token_roundtrip() {
        let id = Uuid::new_v4();
        let (token, expires_at) = issue_token(SECRET, id, "admin", 24).unwrap();

        let claims = verify_token(SECRET, &token).unwrap();
        assert_eq!(claims.sub, id);
        assert_eq!(claims.username, "admin");
        assert_eq!(claims.exp, expires_at.timestamp());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let (token, _) = issue_token(SECRET, Uuid::new_v4(), "admin", 24).unwrap();
        assert!(verify_token("another-secret-entirely", &token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        // Issue a token that expired hours ago (beyond default leeway)
        let (token, _) = issue_token(SECRET, Uuid::new_v4(), "admin", -3).unwrap();
        assert!(verify_token(SECRET, &token).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(verify_token(SECRET, "not-a-token").is_err());
    }
}
