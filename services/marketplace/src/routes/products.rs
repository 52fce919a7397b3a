//! Product listing endpoints
//!
//! Mutations are owner-scoped in the repository query itself: a valid
//! token belonging to someone else gets the same 404 as a nonexistent id,
//! so these endpoints never confirm that another user's listing exists.

use axum::{
    Extension, Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    middleware::AuthUser,
    models::{ItemsResponse, NewProduct, ProductQuery, UpdateProduct},
    notify::ListingEvent,
    state::AppState,
    validation,
};

use super::require_json;

/// Search listings by title substring and/or category
pub async fn search_listings(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> ApiResult<impl IntoResponse> {
    let items = state.products.search(&query).await?;
    Ok(Json(ItemsResponse::new(items)))
}

/// Read a single listing
pub async fn get_listing(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let product = state
        .products
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(product))
}

/// Create a listing owned by the caller
pub async fn create_listing(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    payload: Result<Json<NewProduct>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let new_product = require_json(payload)?;

    validation::validate_listing(&new_product.title, &new_product.category, new_product.price)
        .map_err(ApiError::Validation)?;

    let product = state.products.create(caller.id, &new_product).await?;

    state.notifier.publish(ListingEvent::from(&product));

    Ok((StatusCode::CREATED, Json(product)))
}

/// Update one of the caller's listings
pub async fn update_listing(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    payload: Result<Json<UpdateProduct>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let changes = require_json(payload)?;

    if let Some(title) = &changes.title {
        if title.trim().is_empty() {
            return Err(ApiError::Validation("title is required".to_string()));
        }
    }
    if let Some(category) = &changes.category {
        if category.trim().is_empty() {
            return Err(ApiError::Validation("category is required".to_string()));
        }
    }
    if let Some(price) = changes.price {
        validation::validate_price(price).map_err(ApiError::Validation)?;
    }

    let product = state
        .products
        .update(caller.id, id, &changes)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(product))
}

/// Delete one of the caller's listings
pub async fn delete_listing(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    if !state.products.delete(caller.id, id).await? {
        return Err(ApiError::NotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}

/// List the caller's own listings
pub async fn my_listings(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
) -> ApiResult<impl IntoResponse> {
    let items = state.products.list_by_owner(caller.id).await?;
    Ok(Json(ItemsResponse::new(items)))
}
