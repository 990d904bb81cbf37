use super::AppState;
use crate::{
    entities::{CartModel, LineItem},
    errors::{Error, Result},
};
use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
};

/// `POST /api/carts`
pub async fn create(State(state): State<AppState>) -> Result<(StatusCode, Json<CartModel>)> {
    let cart = state.carts.create_cart().await?;
    Ok((StatusCode::CREATED, Json(cart)))
}

/// `GET /api/carts/{id}` - responds with the cart's line items only.
pub async fn show(
    State(state): State<AppState>,
    path: std::result::Result<Path<u64>, PathRejection>,
) -> Result<Json<Vec<LineItem>>> {
    let Path(id) = path?;
    state
        .carts
        .get_cart_by_id(id)
        .await
        .map(|cart| Json(cart.products))
        .ok_or(Error::CartNotFound { id })
}

/// `POST /api/carts/{id}/product/{pid}`
///
/// With product validation enabled an unknown `pid` is rejected before the
/// cart is looked up.
pub async fn add_product(
    State(state): State<AppState>,
    path: std::result::Result<Path<(u64, u64)>, PathRejection>,
) -> Result<Json<CartModel>> {
    let Path((cart_id, product_id)) = path?;
    if state.validate_cart_products
        && state.products.get_product_by_id(product_id).await.is_none()
    {
        return Err(Error::ProductNotFound { id: product_id });
    }

    state
        .carts
        .add_product_to_cart(cart_id, product_id)
        .await?
        .map(Json)
        .ok_or(Error::CartNotFound { id: cart_id })
}
