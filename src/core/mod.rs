//! Core business logic - framework-agnostic product and cart stores.

/// File-backed cart store
pub mod cart;
/// File-backed product store
pub mod product;
/// JSON file persistence shared by the stores
pub mod storage;

pub use cart::CartStore;
pub use product::ProductStore;
