//! Site settings DTOs

use serde::{Deserialize, Serialize};

/// Request to set a site setting value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSetting {
    pub value: String,
}
