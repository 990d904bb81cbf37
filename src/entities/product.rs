//! Product entity - Represents a catalog item persisted in the products file.
//!
//! Besides the stored [`Model`], this module holds the two request payloads the
//! store accepts: [`NewProduct`] for creation (every field optional so missing
//! ones can be reported by name) and [`ProductPatch`] for partial updates.

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// Product record as stored on disk and returned over HTTP
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Store-assigned identifier, never changes after creation
    pub id: u64,
    /// Display title (e.g., "Mechanical Keyboard")
    #[serde(default)]
    pub title: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Unique product code (e.g., "KB-001")
    #[serde(default)]
    pub code: String,
    /// Unit price
    #[serde(default)]
    pub price: f64,
    /// Units in stock
    #[serde(default)]
    pub stock: u32,
    /// Catalog category (e.g., "hardware")
    #[serde(default)]
    pub category: String,
    /// Whether the product is active; `true` on creation
    pub status: bool,
}

/// Creation payload. Absent fields deserialize to `None` and are rejected by
/// [`NewProduct::into_model`].
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewProduct {
    /// Required, non-empty
    pub title: Option<String>,
    /// Required, non-empty
    pub description: Option<String>,
    /// Required, non-empty and unique within the store
    pub code: Option<String>,
    /// Required; zero is accepted
    pub price: Option<f64>,
    /// Required; zero is accepted
    pub stock: Option<u32>,
    /// Required, non-empty
    pub category: Option<String>,
}

/// Partial update payload. Only the fields present are merged; an `id` key in
/// the incoming JSON is ignored. Text fields that are present must not be
/// empty, same as on creation.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProductPatch {
    /// New title
    pub title: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New code; must not collide with another product's code
    pub code: Option<String>,
    /// New unit price
    pub price: Option<f64>,
    /// New stock level
    pub stock: Option<u32>,
    /// New category
    pub category: Option<String>,
    /// Activate or deactivate the product
    pub status: Option<bool>,
}

fn required_text(value: Option<String>, field: &'static str) -> Result<String> {
    match value {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(Error::Validation { field }),
    }
}

fn required_number<T>(value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or(Error::Validation { field })
}

impl NewProduct {
    /// Validates the payload and builds an active product with the given id.
    ///
    /// Text fields must be present and non-empty. `price` and `stock` only need
    /// to be present, so zero is accepted.
    ///
    /// # Errors
    /// Returns [`Error::Validation`] naming the first missing field, checked in
    /// the order title, description, code, price, stock, category.
    pub fn into_model(self, id: u64) -> Result<Model> {
        Ok(Model {
            id,
            title: required_text(self.title, "title")?,
            description: required_text(self.description, "description")?,
            code: required_text(self.code, "code")?,
            price: required_number(self.price, "price")?,
            stock: required_number(self.stock, "stock")?,
            category: required_text(self.category, "category")?,
            status: true,
        })
    }
}

fn non_empty(value: Option<&String>, field: &'static str) -> Result<()> {
    match value {
        Some(text) if text.is_empty() => Err(Error::Validation { field }),
        _ => Ok(()),
    }
}

impl ProductPatch {
    /// Checks that no text field is being set to an empty string.
    ///
    /// # Errors
    /// Returns [`Error::Validation`] naming the first empty field.
    pub fn validate(&self) -> Result<()> {
        non_empty(self.title.as_ref(), "title")?;
        non_empty(self.description.as_ref(), "description")?;
        non_empty(self.code.as_ref(), "code")?;
        non_empty(self.category.as_ref(), "category")
    }
}

impl Model {
    /// Shallow merge of `patch` over this record. The id is left untouched.
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(code) = patch.code {
            self.code = code;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::sample_product;

    #[test]
    fn test_into_model_sets_id_and_status() {
        let product = sample_product("KB-001").into_model(7).unwrap();

        assert_eq!(product.id, 7);
        assert_eq!(product.code, "KB-001");
        assert_eq!(product.title, "Product KB-001");
        assert!(product.status);
    }

    #[test]
    fn test_into_model_accepts_zero_price_and_stock() {
        let payload = NewProduct {
            price: Some(0.0),
            stock: Some(0),
            ..sample_product("FREE")
        };

        let product = payload.into_model(1).unwrap();
        assert_eq!(product.price, 0.0);
        assert_eq!(product.stock, 0);
    }

    #[test]
    fn test_into_model_reports_first_missing_field() {
        let payload = NewProduct {
            description: None,
            category: None,
            ..sample_product("X")
        };

        let err = payload.into_model(1).unwrap_err();
        assert!(matches!(err, Error::Validation { field: "description" }));
    }

    #[test]
    fn test_into_model_rejects_empty_text() {
        let payload = NewProduct {
            title: Some(String::new()),
            ..sample_product("X")
        };

        let err = payload.into_model(1).unwrap_err();
        assert!(matches!(err, Error::Validation { field: "title" }));
    }

    #[test]
    fn test_patch_ignores_incoming_id() {
        let mut product = sample_product("KB-001").into_model(3).unwrap();
        let patch: ProductPatch =
            serde_json::from_str(r#"{"id": 99, "price": 12.5, "status": false}"#).unwrap();

        product.apply(patch);

        assert_eq!(product.id, 3);
        assert_eq!(product.price, 12.5);
        assert!(!product.status);
        assert_eq!(product.code, "KB-001");
    }

    #[test]
    fn test_patch_rejects_empty_text() {
        let patch: ProductPatch = serde_json::from_str(r#"{"code": "A", "title": ""}"#).unwrap();

        let err = patch.validate().unwrap_err();
        assert!(matches!(err, Error::Validation { field: "title" }));
    }

    #[test]
    fn test_patch_without_text_fields_is_valid() {
        let patch: ProductPatch = serde_json::from_str(r#"{"stock": 0}"#).unwrap();
        assert!(patch.validate().is_ok());
    }

    #[test]
    fn test_legacy_record_without_descriptive_fields_loads() {
        let product: Model = serde_json::from_str(r#"{"id": 4, "status": true}"#).unwrap();

        assert_eq!(product.id, 4);
        assert!(product.title.is_empty());
        assert!(product.status);
    }
}
