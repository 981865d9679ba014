//! Site Settings API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use nectar_core::domain::settings::SiteSetting;
use nectar_core::dto::settings::UpdateSetting;

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};
use crate::service::settings_service;

fn map_error(e: settings_service::SettingsError) -> ApiError {
    match e {
        settings_service::SettingsError::ValidationError(msg) => ApiError::BadRequest(msg),
        settings_service::SettingsError::DatabaseError(err) => ApiError::DatabaseError(err),
    }
}

/// GET /api/settings/list
/// List all site settings
pub async fn list_settings(State(state): State<AppState>) -> ApiResult<Json<Vec<SiteSetting>>> {
    tracing::debug!("Listing settings");

    let settings = settings_service::list_settings(&state.pool)
        .await
        .map_err(map_error)?;

    Ok(Json(settings))
}

/// PUT /api/settings/{key}
/// Set a site setting
pub async fn set_setting(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(req): Json<UpdateSetting>,
) -> ApiResult<Json<SiteSetting>> {
    tracing::info!("Setting {} updated", key);

    let setting = settings_service::set_setting(&state.pool, &key, &req.value)
        .await
        .map_err(map_error)?;

    Ok(Json(setting))
}
