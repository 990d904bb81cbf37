//! Unified error types for the storefront.
//!
//! Store operations report domain failures (validation, duplicate codes) and
//! persistence failures through [`Error`]. Lookups that simply find nothing are
//! not errors at the store level; they return `None` and the HTTP layer turns
//! them into the not-found variants below.

use axum::extract::rejection::{JsonRejection, PathRejection};
use thiserror::Error;

/// Every failure the stores, the HTTP layer and startup can report.
#[derive(Debug, Error)]
pub enum Error {
    /// A required product field was absent, or a text field was empty.
    #[error("Missing required field: {field}")]
    Validation {
        /// Name of the offending field
        field: &'static str,
    },

    /// Another product already uses this code.
    #[error("A product with code '{code}' already exists")]
    DuplicateCode {
        /// The conflicting code
        code: String,
    },

    /// The request body is not valid JSON for the expected payload, or a
    /// field has the wrong type.
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    /// A path parameter is not a valid id.
    #[error("Invalid path parameter: {0}")]
    InvalidPath(#[from] PathRejection),

    /// No product has this id.
    #[error("Product not found: {id}")]
    ProductNotFound {
        /// Requested product id
        id: u64,
    },

    /// No cart has this id.
    #[error("Cart not found: {id}")]
    CartNotFound {
        /// Requested cart id
        id: u64,
    },

    /// Reading or rewriting a backing file failed.
    #[error("Persistence error: {0}")]
    Persistence(#[from] std::io::Error),

    /// Encoding records as JSON failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Binding or running the HTTP listener failed.
    #[error("Server error: {source}")]
    Server {
        /// Underlying socket error
        source: std::io::Error,
    },

    /// The config file or an environment override is invalid.
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
