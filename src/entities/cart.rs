//! Cart entity - A shopping cart holding product references and quantities.
//!
//! Line items reference products by id only. Nothing here checks that the
//! referenced product exists.

use serde::{Deserialize, Serialize};

/// Cart record as stored on disk
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// Store-assigned identifier
    pub id: u64,
    /// Line items in first-add order
    pub products: Vec<LineItem>,
}

/// One product reference inside a cart
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Referenced product id
    pub product: u64,
    /// Always at least 1
    pub quantity: u32,
}

impl Model {
    /// Creates an empty cart.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self {
            id,
            products: Vec::new(),
        }
    }

    /// Adds one unit of `product_id`, bumping the existing line item if there is one.
    pub fn add_product(&mut self, product_id: u64) {
        match self
            .products
            .iter_mut()
            .find(|item| item.product == product_id)
        {
            Some(item) => item.quantity += 1,
            None => self.products.push(LineItem {
                product: product_id,
                quantity: 1,
            }),
        }
    }
}
