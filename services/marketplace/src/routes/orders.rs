//! Checkout and order endpoints

use axum::{
    Extension, Json, extract::State, http::StatusCode, response::IntoResponse,
};
use serde_json::json;

use crate::{
    error::{ApiError, ApiResult},
    middleware::AuthUser,
    models::ItemsResponse,
    state::AppState,
};

/// Convert the caller's cart into orders
pub async fn checkout(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
) -> ApiResult<impl IntoResponse> {
    let created = state.orders.checkout(caller.id).await?;

    if created == 0 {
        return Err(ApiError::Validation("cart is empty".to_string()));
    }

    Ok((
        StatusCode::CREATED,
        Json(json!({ "orders_created": created })),
    ))
}

/// List the caller's past orders
pub async fn list_orders(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
) -> ApiResult<impl IntoResponse> {
    let items = state.orders.list(caller.id).await?;
    Ok(Json(ItemsResponse::new(items)))
}
