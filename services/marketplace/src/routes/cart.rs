//! Cart endpoints

use axum::{
    Extension, Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    middleware::AuthUser,
    models::{ItemsResponse, NewCartItem},
    state::AppState,
    validation,
};

use super::require_json;

/// List the caller's cart
pub async fn get_cart(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
) -> ApiResult<impl IntoResponse> {
    let items = state.cart.list(caller.id).await?;
    Ok(Json(ItemsResponse::new(items)))
}

/// Add a listing to the caller's cart
pub async fn add_to_cart(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    payload: Result<Json<NewCartItem>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let new_item = require_json(payload)?;
    validation::validate_quantity(new_item.quantity).map_err(ApiError::Validation)?;

    // an unknown product_id trips the foreign key and maps to 404
    let item = state
        .cart
        .add(caller.id, new_item.product_id, new_item.quantity)
        .await?;

    Ok((StatusCode::CREATED, Json(item)))
}

/// Remove an item from the caller's cart
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    if !state.cart.remove(caller.id, id).await? {
        return Err(ApiError::NotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}
