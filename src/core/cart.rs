//! Cart business logic - The file-backed cart store.
//!
//! Same persistence contract as the product store: the whole cart list lives in
//! memory and every mutation, including adding a product to a cart, rewrites
//! the carts file before returning.

use crate::{
    core::storage::{Identified, JsonFile, next_id_after},
    entities::CartModel,
    errors::Result,
};
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument};

impl Identified for CartModel {
    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug)]
struct State {
    carts: Vec<CartModel>,
    next_id: u64,
}

/// In-memory cart list mirrored to a JSON file.
#[derive(Debug)]
pub struct CartStore {
    file: JsonFile,
    state: RwLock<State>,
}

impl CartStore {
    /// Opens the store backed by `path`, loading any existing carts.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub async fn open(path: impl AsRef<std::path::Path>) -> Self {
        let file = JsonFile::new(path.as_ref());
        let carts: Vec<CartModel> = file.load().await;
        let next_id = next_id_after(&carts);
        info!(count = carts.len(), next_id, "Cart store loaded");

        Self {
            file,
            state: RwLock::new(State { carts, next_id }),
        }
    }

    /// Id the next created cart will receive.
    pub async fn next_id(&self) -> u64 {
        self.state.read().await.next_id
    }

    /// Number of carts currently held.
    pub async fn len(&self) -> usize {
        self.state.read().await.carts.len()
    }

    /// Whether the store holds no carts.
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.carts.is_empty()
    }

    /// Creates an empty cart with the next id.
    ///
    /// # Errors
    /// Returns an error if the carts file cannot be rewritten.
    #[instrument(skip(self))]
    pub async fn create_cart(&self) -> Result<CartModel> {
        let mut state = self.state.write().await;

        let cart = CartModel::new(state.next_id);
        state.next_id += 1;
        state.carts.push(cart.clone());
        self.persist(&state).await?;

        info!(id = cart.id, "Cart created");
        Ok(cart)
    }

    /// Linear scan for the cart with `id`.
    pub async fn get_cart_by_id(&self, id: u64) -> Option<CartModel> {
        self.state
            .read()
            .await
            .carts
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    /// Adds one unit of `product_id` to the cart and returns the updated cart,
    /// or `None` if the cart does not exist. The product id is not checked.
    ///
    /// # Errors
    /// Returns an error if the carts file cannot be rewritten.
    #[instrument(skip(self))]
    pub async fn add_product_to_cart(
        &self,
        cart_id: u64,
        product_id: u64,
    ) -> Result<Option<CartModel>> {
        let mut state = self.state.write().await;

        let Some(cart) = state.carts.iter_mut().find(|c| c.id == cart_id) else {
            debug!("Cart not found");
            return Ok(None);
        };
        cart.add_product(product_id);
        let updated = cart.clone();

        self.persist(&state).await?;
        debug!(items = updated.products.len(), "Product added to cart");
        Ok(Some(updated))
    }

    async fn persist(&self, state: &State) -> Result<()> {
        self.file
            .save(&state.carts)
            .await
            .inspect_err(|e| {
                error!(path = %self.file.path().display(), "Failed to persist carts: {}", e);
            })
    }
}
