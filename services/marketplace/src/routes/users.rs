//! Profile endpoints
//!
//! `/users/me` operates on the caller; the legacy `/users/:id` variant
//! answers an explicit 403 when the path id is not the caller's own. This
//! is intentionally louder than the listing endpoints, which hide foreign
//! resources behind 404.

use axum::{
    Extension, Json,
    extract::{Path, State, rejection::JsonRejection},
    response::IntoResponse,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    middleware::AuthUser,
    models::{UpdateUser, User},
    password,
    state::AppState,
    validation,
};

use super::require_json;

/// Read the caller's profile
pub async fn get_me(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
) -> ApiResult<impl IntoResponse> {
    let user = state
        .users
        .find_by_id(caller.id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(user))
}

/// Update the caller's profile
pub async fn update_me(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    payload: Result<Json<UpdateUser>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let changes = require_json(payload)?;
    let user = apply_update(&state, caller.id, changes).await?;
    Ok(Json(user))
}

/// Read a profile by id (legacy path-parameter variant)
pub async fn get_user(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    if id != caller.id {
        return Err(ApiError::Forbidden);
    }

    let user = state
        .users
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(user))
}

/// Update a profile by id (legacy path-parameter variant)
pub async fn update_user(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    payload: Result<Json<UpdateUser>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    if id != caller.id {
        return Err(ApiError::Forbidden);
    }

    let changes = require_json(payload)?;
    let user = apply_update(&state, id, changes).await?;
    Ok(Json(user))
}

async fn apply_update(state: &AppState, id: Uuid, changes: UpdateUser) -> ApiResult<User> {
    if let Some(email) = &changes.email {
        validation::validate_email(email).map_err(ApiError::Validation)?;
    }
    if let Some(username) = &changes.username {
        validation::validate_username(username).map_err(ApiError::Validation)?;
    }

    let password_hash = match changes.password {
        Some(password) => {
            validation::validate_password(&password).map_err(ApiError::Validation)?;
            let hash = password::hash_password(password).await.map_err(|e| {
                error!("Failed to hash password: {}", e);
                ApiError::Internal
            })?;
            Some(hash)
        }
        None => None,
    };

    let user = state
        .users
        .update(
            id,
            changes.email.as_deref(),
            changes.username.as_deref(),
            password_hash.as_deref(),
        )
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(user)
}
