//! Entity module - Record types persisted by the stores.
//! Each entity has a `Model` struct for the stored record plus any request
//! payloads that build or modify it.

pub mod cart;
pub mod product;

// Re-export specific types to avoid conflicts
pub use cart::{LineItem, Model as CartModel};
pub use product::{Model as ProductModel, NewProduct, ProductPatch};
