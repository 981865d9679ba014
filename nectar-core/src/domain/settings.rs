//! Site settings domain types

use serde::{Deserialize, Serialize};

/// A single key/value site setting
///
/// Settings are runtime-editable configuration (affiliate tag, site
/// title, ...) as opposed to deployment configuration from environment
/// variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSetting {
    pub key: String,
    pub value: String,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
