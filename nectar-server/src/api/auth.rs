//! Auth API Handlers

use axum::{Json, extract::State};
use nectar_core::dto::auth::{LoginRequest, LoginResponse};

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};
use crate::service::auth_service;

/// POST /api/auth/login
/// Authenticate an admin and return a bearer token
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    tracing::info!("Login attempt for user: {}", req.username);

    let response = auth_service::login(&state.pool, &state.config, req)
        .await
        .map_err(|e| match e {
            auth_service::AuthServiceError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid username or password".to_string())
            }
            auth_service::AuthServiceError::ValidationError(msg) => ApiError::BadRequest(msg),
            auth_service::AuthServiceError::DatabaseError(err) => ApiError::DatabaseError(err),
            auth_service::AuthServiceError::InternalError(msg) => ApiError::InternalError(msg),
        })?;

    Ok(Json(response))
}
