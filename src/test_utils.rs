//! Shared test utilities for the storefront.
//!
//! This module provides scratch data directories and helpers for building
//! stores and payloads with sensible defaults.

use crate::{
    api::AppState,
    core::{CartStore, ProductStore},
    entities::NewProduct,
};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_DIR: AtomicUsize = AtomicUsize::new(0);

/// A scratch directory under the system temp dir, removed on drop.
#[derive(Debug)]
pub struct TestDir {
    path: PathBuf,
}

impl TestDir {
    /// Creates a fresh, empty directory.
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        let path = std::env::temp_dir().join(format!(
            "storefront-test-{}-{}",
            std::process::id(),
            NEXT_DIR.fetch_add(1, Ordering::Relaxed)
        ));
        let _ = std::fs::remove_dir_all(&path);
        std::fs::create_dir_all(&path).expect("create test dir");
        Self { path }
    }

    /// Location of the directory
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TestDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

/// A complete creation payload for `code`.
///
/// # Defaults
/// * `title`: "Product {code}"
/// * `description`: "Test product"
/// * `price`: 10.0
/// * `stock`: 5
/// * `category`: "hardware"
pub fn sample_product(code: &str) -> NewProduct {
    NewProduct {
        title: Some(format!("Product {code}")),
        description: Some("Test product".to_string()),
        code: Some(code.to_string()),
        price: Some(10.0),
        stock: Some(5),
        category: Some("hardware".to_string()),
    }
}

/// Opens an empty product store in a fresh directory.
/// The directory must outlive the store, so both are returned.
pub async fn setup_product_store() -> (TestDir, ProductStore) {
    let dir = TestDir::new();
    let store = ProductStore::open(dir.path().join("products.json")).await;
    (dir, store)
}

/// Opens an empty cart store in a fresh directory.
pub async fn setup_cart_store() -> (TestDir, CartStore) {
    let dir = TestDir::new();
    let store = CartStore::open(dir.path().join("carts.json")).await;
    (dir, store)
}

/// Builds handler state over empty stores sharing one fresh directory.
pub async fn setup_app_state(validate_cart_products: bool) -> (TestDir, AppState) {
    let dir = TestDir::new();
    let products = ProductStore::open(dir.path().join("products.json")).await;
    let carts = CartStore::open(dir.path().join("carts.json")).await;
    (dir, AppState::new(products, carts, validate_cart_products))
}
