use super::AppState;
use crate::{
    entities::{NewProduct, ProductModel, ProductPatch},
    errors::{Error, Result},
};
use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};

/// `GET /api/products`
pub async fn list(State(state): State<AppState>) -> Json<Vec<ProductModel>> {
    Json(state.products.get_products().await)
}

/// `GET /api/products/{id}`
pub async fn show(
    State(state): State<AppState>,
    path: std::result::Result<Path<u64>, PathRejection>,
) -> Result<Json<ProductModel>> {
    let Path(id) = path?;
    state
        .products
        .get_product_by_id(id)
        .await
        .map(Json)
        .ok_or(Error::ProductNotFound { id })
}

/// `POST /api/products`
pub async fn create(
    State(state): State<AppState>,
    body: std::result::Result<Json<NewProduct>, JsonRejection>,
) -> Result<(StatusCode, Json<ProductModel>)> {
    let Json(payload) = body?;
    let product = state.products.add_product(payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// `PUT /api/products/{id}`
pub async fn update(
    State(state): State<AppState>,
    path: std::result::Result<Path<u64>, PathRejection>,
    body: std::result::Result<Json<ProductPatch>, JsonRejection>,
) -> Result<Json<ProductModel>> {
    let Path(id) = path?;
    let Json(patch) = body?;
    state
        .products
        .update_product(id, patch)
        .await?
        .map(Json)
        .ok_or(Error::ProductNotFound { id })
}

/// `DELETE /api/products/{id}`
pub async fn remove(
    State(state): State<AppState>,
    path: std::result::Result<Path<u64>, PathRejection>,
) -> Result<StatusCode> {
    let Path(id) = path?;
    if state.products.delete_product(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(Error::ProductNotFound { id })
    }
}
