use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use models::item;
use service::item::{CreateItemInput, UpdateItemInput};

use crate::errors::ApiError;
use crate::routes::AppState;

/// Non-integer ids never match an item.
fn item_id(id: Result<Path<i32>, PathRejection>) -> Result<i32, ApiError> {
    id.map(|Path(id)| id).map_err(|_| ApiError::NotFound("Item not found".into()))
}

/// Decode a request body that must be a JSON object; arrays and scalars are 400.
fn object_body<T: DeserializeOwned>(payload: Result<Json<Value>, JsonRejection>) -> Result<T, ApiError> {
    let Json(value) = payload?;
    if !value.is_object() {
        return Err(ApiError::BadRequest("request body must be a JSON object".into()));
    }
    serde_json::from_value(value).map_err(|e| ApiError::BadRequest(format!("invalid request body: {e}")))
}

#[utoipa::path(
    get, path = "/items", tag = "items",
    responses(
        (status = 200, description = "All items in insertion order", body = [crate::openapi::ItemDoc]),
        (status = 500, description = "Storage error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<item::Model>>, ApiError> {
    Ok(Json(state.items.list().await?))
}

#[utoipa::path(
    post, path = "/items", tag = "items",
    request_body = crate::openapi::CreateItemInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ItemDoc),
        (status = 400, description = "Missing or invalid name", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Storage error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<item::Model>), ApiError> {
    let input: CreateItemInput = object_body(payload)?;
    let created = state.items.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/items/{id}", tag = "items",
    params(("id" = i32, Path, description = "Item ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ItemDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<item::Model>, ApiError> {
    let id = item_id(id)?;
    Ok(Json(state.items.get(id).await?))
}

#[utoipa::path(
    put, path = "/items/{id}", tag = "items",
    params(("id" = i32, Path, description = "Item ID")),
    request_body = crate::openapi::UpdateItemInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ItemDoc),
        (status = 400, description = "No data provided", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Storage error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<item::Model>, ApiError> {
    let id = item_id(id)?;
    let input: UpdateItemInput = object_body(payload)?;
    Ok(Json(state.items.update(id, input).await?))
}

#[utoipa::path(
    delete, path = "/items/{id}", tag = "items",
    params(("id" = i32, Path, description = "Item ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Storage error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let id = item_id(id)?;
    state.items.delete(id).await?;
    Ok(Json(json!({"message": "Item deleted"})))
}
