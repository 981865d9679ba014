//! Site Settings Repository

use nectar_core::domain::settings::SiteSetting;
use sqlx::PgPool;

/// Insert or replace a setting value
pub async fn upsert(pool: &PgPool, key: &str, value: &str) -> Result<SiteSetting, sqlx::Error> {
    let now = chrono::Utc::now();

    sqlx::query(
        r#"
        INSERT INTO site_settings (key, value, updated_at)
        VALUES ($1, $2, $3)
        ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = EXCLUDED.updated_at
        "#,
    )
    .bind(key)
    .bind(value)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(SiteSetting {
        key: key.to_string(),
        value: value.to_string(),
        updated_at: now,
    })
}

/// List all settings, sorted by key
pub async fn list(pool: &PgPool) -> Result<Vec<SiteSetting>, sqlx::Error> {
    let rows = sqlx::query_as::<_, SettingRow>(
        "SELECT key, value, updated_at FROM site_settings ORDER BY key",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|r| r.into()).collect())
}

// =============================================================================
// Database Row Types
// =============================================================================

#[derive(sqlx::FromRow)]
struct SettingRow {
    key: String,
    value: String,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<SettingRow> for SiteSetting {
    fn from(row: SettingRow) -> Self {
        SiteSetting {
            key: row.key,
            value: row.value,
            updated_at: row.updated_at,
        }
    }
}
