//! Product business logic - The file-backed product store.
//!
//! [`ProductStore`] keeps every product in memory in insertion order and
//! rewrites its JSON file after each mutation. Ids come from a counter seeded
//! at load time with one past the highest stored id, so deleted ids are never
//! handed out again. Lookups are linear scans.

use crate::{
    core::storage::{Identified, JsonFile, next_id_after},
    entities::{NewProduct, ProductModel, ProductPatch},
    errors::{Error, Result},
};
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument};

impl Identified for ProductModel {
    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug)]
struct State {
    products: Vec<ProductModel>,
    next_id: u64,
}

/// In-memory product list mirrored to a JSON file.
#[derive(Debug)]
pub struct ProductStore {
    file: JsonFile,
    state: RwLock<State>,
}

impl ProductStore {
    /// Opens the store backed by `path`, loading any existing products.
    ///
    /// The returned store is fully loaded. An absent or unparsable file gives
    /// an empty store whose first product gets id 1.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub async fn open(path: impl AsRef<std::path::Path>) -> Self {
        let file = JsonFile::new(path.as_ref());
        let products: Vec<ProductModel> = file.load().await;
        let next_id = next_id_after(&products);
        info!(count = products.len(), next_id, "Product store loaded");

        Self {
            file,
            state: RwLock::new(State { products, next_id }),
        }
    }

    /// Id the next created product will receive.
    pub async fn next_id(&self) -> u64 {
        self.state.read().await.next_id
    }

    /// Number of products currently held.
    pub async fn len(&self) -> usize {
        self.state.read().await.products.len()
    }

    /// Whether the store holds no products.
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.products.is_empty()
    }

    /// Validates and stores a new product, returning it with its assigned id.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A required field is missing ([`Error::Validation`])
    /// - Another product already has the same code ([`Error::DuplicateCode`])
    /// - The products file cannot be rewritten. The product stays in memory
    ///   in that case.
    #[instrument(skip_all, fields(code = payload.code.as_deref().unwrap_or_default()))]
    pub async fn add_product(&self, payload: NewProduct) -> Result<ProductModel> {
        let mut state = self.state.write().await;

        let product = payload.into_model(state.next_id)?;
        if state.products.iter().any(|p| p.code == product.code) {
            debug!("Rejected duplicate product code");
            return Err(Error::DuplicateCode { code: product.code });
        }

        state.next_id += 1;
        state.products.push(product.clone());
        self.persist(&state).await?;

        info!(id = product.id, "Product created");
        Ok(product)
    }

    /// Snapshot of every product in insertion order.
    pub async fn get_products(&self) -> Vec<ProductModel> {
        self.state.read().await.products.clone()
    }

    /// Linear scan for the product with `id`.
    pub async fn get_product_by_id(&self, id: u64) -> Option<ProductModel> {
        self.state
            .read()
            .await
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    /// Merges `patch` into the product with `id`, returning the updated record,
    /// or `None` if there is no such product.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The patch sets a text field to an empty string ([`Error::Validation`])
    /// - The patch moves the product onto another product's code
    ///   ([`Error::DuplicateCode`])
    /// - The products file cannot be rewritten
    ///
    /// Nothing is changed or written when validation fails.
    #[instrument(skip(self, patch))]
    pub async fn update_product(
        &self,
        id: u64,
        patch: ProductPatch,
    ) -> Result<Option<ProductModel>> {
        let mut state = self.state.write().await;

        let Some(index) = state.products.iter().position(|p| p.id == id) else {
            debug!("Product not found for update");
            return Ok(None);
        };
        patch.validate()?;
        let taken = patch
            .code
            .as_ref()
            .filter(|code| state.products.iter().any(|p| p.id != id && &p.code == *code));
        if let Some(code) = taken {
            debug!("Rejected update to a duplicate product code");
            return Err(Error::DuplicateCode { code: code.clone() });
        }

        let product = &mut state.products[index];
        product.apply(patch);
        let updated = product.clone();

        self.persist(&state).await?;
        debug!("Product updated");
        Ok(Some(updated))
    }

    /// Removes the product with `id`. Returns `false` if it did not exist.
    ///
    /// Carts referencing the product are left as they are.
    ///
    /// # Errors
    /// Returns an error if the products file cannot be rewritten.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: u64) -> Result<bool> {
        let mut state = self.state.write().await;

        let Some(index) = state.products.iter().position(|p| p.id == id) else {
            debug!("Product not found for delete");
            return Ok(false);
        };
        state.products.remove(index);

        self.persist(&state).await?;
        info!("Product deleted");
        Ok(true)
    }

    async fn persist(&self, state: &State) -> Result<()> {
        self.file
            .save(&state.products)
            .await
            .inspect_err(|e| {
                error!(path = %self.file.path().display(), "Failed to persist products: {}", e);
            })
    }
}
