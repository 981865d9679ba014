//! Admin user repository
//!
//! Handles all database operations related to admin accounts.

use nectar_core::domain::user::AdminUser;
use sqlx::PgPool;
use uuid::Uuid;

/// Create a new admin user with an already-hashed password
pub async fn create(
    pool: &PgPool,
    username: &str,
    password_hash: &str,
) -> Result<AdminUser, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = chrono::Utc::now();

    sqlx::query(
        r#"
        INSERT INTO admin_users (id, username, password_hash, created_at)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(id)
    .bind(username)
    .bind(password_hash)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(AdminUser {
        id,
        username: username.to_string(),
        password_hash: password_hash.to_string(),
        created_at: now,
    })
}

/// Find an admin by username
pub async fn find_by_username(
    pool: &PgPool,
    username: &str,
) -> Result<Option<AdminUser>, sqlx::Error> {
    let row = sqlx::query_as::<_, AdminUserRow>(
        r#"
        SELECT id, username, password_hash, created_at
        FROM admin_users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| r.into()))
}

/// Count all admin users
pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM admin_users")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

// =============================================================================
// Database Row Types
// =============================================================================

#[derive(sqlx::FromRow)]
struct AdminUserRow {
    id: Uuid,
    username: String,
    password_hash: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<AdminUserRow> for AdminUser {
    fn from(row: AdminUserRow) -> Self {
        AdminUser {
            id: row.id,
            username: row.username,
            password_hash: row.password_hash,
            created_at: row.created_at,
        }
    }
}
