//! Product CRUD endpoints.
//!
//! Each handler validates its input (body-bearing requests), invokes exactly
//! one service operation, and maps the service's absence signal to 404. No
//! handler touches the store directly.

use crate::error::{ApiError, ApiResult};
use crate::product::dto::{CreateProduct, UpdateProduct};
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

/// `POST /products` — create a product from a full, validated input.
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<CreateProduct>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(input) = payload?;
    let input = input.validate().map_err(ApiError::Validation)?;

    let product = state.products.create(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// `GET /products` — every product, store insertion order, possibly empty.
pub async fn list_products(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let products = state.products.list_all().await?;
    Ok(Json(products))
}

/// `GET /products/{id}`
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let product = state
        .products
        .get_by_id(&id)
        .await?
        .ok_or(ApiError::ProductNotFound(id))?;
    Ok(Json(product))
}

/// `PUT /products/{id}` — partial update; omitted fields keep their values.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateProduct>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(patch) = payload?;
    let patch = patch.validate().map_err(ApiError::Validation)?;

    let product = state
        .products
        .update(&id, patch)
        .await?
        .ok_or(ApiError::ProductNotFound(id))?;
    Ok(Json(product))
}

/// `DELETE /products/{id}` — hard delete, responds with the pre-delete state.
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let product = state
        .products
        .remove(&id)
        .await?
        .ok_or(ApiError::ProductNotFound(id))?;
    Ok(Json(product))
}
