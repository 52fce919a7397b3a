//! Signup and login endpoints

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use tracing::{error, info};

use crate::{
    error::{ApiError, ApiResult},
    models::{LoginCredentials, NewUser},
    password,
    state::AppState,
    validation,
};

use super::require_json;

/// Register a new user
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<NewUser>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let new_user = require_json(payload)?;

    validation::validate_email(&new_user.email).map_err(ApiError::Validation)?;
    validation::validate_username(&new_user.username).map_err(ApiError::Validation)?;
    validation::validate_password(&new_user.password).map_err(ApiError::Validation)?;

    // Hashing is fatal to the request when it fails
    let password_hash = password::hash_password(new_user.password.clone())
        .await
        .map_err(|e| {
            error!("Failed to hash password: {}", e);
            ApiError::Internal
        })?;

    let user = state.users.create(&new_user, &password_hash).await?;

    info!("Registered user {}", user.id);
    Ok((StatusCode::CREATED, Json(user)))
}

/// Authenticate and issue a session token
///
/// An unknown email and a wrong password answer with the same status and
/// body, so the endpoint cannot be used to probe for registered addresses.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginCredentials>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let credentials = require_json(payload)?;

    let Some(user) = state.users.find_by_email(&credentials.email).await? else {
        return Err(ApiError::InvalidCredentials);
    };

    let verified = password::verify_password(credentials.password, user.password_hash.clone())
        .await
        .map_err(|e| {
            error!("Password verification failed: {}", e);
            ApiError::Internal
        })?;

    if !verified {
        return Err(ApiError::InvalidCredentials);
    }

    let token = state.tokens.issue(user.id).map_err(|e| {
        error!("Failed to issue token: {}", e);
        ApiError::Internal
    })?;

    info!("User {} logged in", user.id);
    Ok(Json(json!({
        "token": token,
        "expires_in": state.tokens.ttl_secs(),
        "user": user,
    })))
}
