//! HTTP layer - axum router and handlers over the product and cart stores
//!
//! Handlers are thin: they extract path ids and JSON bodies, call one store
//! operation, and map absent results to not-found errors. Status codes for
//! every error kind are chosen in [`error`].

/// Cart endpoints under `/api/carts`
pub mod carts;
/// `IntoResponse` for the crate error type
pub mod error;
/// Product endpoints under `/api/products`
pub mod products;

use crate::core::{CartStore, ProductStore};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared state available to all handlers.
/// The stores are opened once at startup and shared behind `Arc`s.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Product store for all product operations
    pub products: Arc<ProductStore>,
    /// Cart store for all cart operations
    pub carts: Arc<CartStore>,
    /// Reject adding product ids that do not exist in the product store
    pub validate_cart_products: bool,
}

impl AppState {
    /// Wraps freshly opened stores for sharing across handlers.
    #[must_use]
    pub fn new(products: ProductStore, carts: CartStore, validate_cart_products: bool) -> Self {
        Self {
            products: Arc::new(products),
            carts: Arc::new(carts),
            validate_cart_products,
        }
    }
}

/// Builds the application router with request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/products", get(products::list).post(products::create))
        .route(
            "/api/products/{id}",
            get(products::show)
                .put(products::update)
                .delete(products::remove),
        )
        .route("/api/carts", post(carts::create))
        .route("/api/carts/{id}", get(carts::show))
        .route("/api/carts/{id}/product/{pid}", post(carts::add_product))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
