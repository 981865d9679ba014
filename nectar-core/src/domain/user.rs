//! Admin user domain types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Administrator account
///
/// The password hash never leaves the server; API responses carry
/// [`AdminUserInfo`] instead.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Public view of an admin account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUserInfo {
    pub id: Uuid,
    pub username: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<AdminUser> for AdminUserInfo {
    fn from(user: AdminUser) -> Self {
        AdminUserInfo {
            id: user.id,
            username: user.username,
            created_at: user.created_at,
        }
    }
}
