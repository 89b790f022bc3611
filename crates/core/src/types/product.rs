//! Product domain types.
//!
//! Shared between the storefront server (which stores and serves products)
//! and the cart crate (which holds product snapshots in cart items).

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;

/// A catalog product.
///
/// The `id` is assigned by the repository on insert and is immutable for
/// the lifetime of the record. `category` is a free-text tag (`"cement"`
/// and `"kirana"` by convention, not a closed set).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub category: String,
    pub image_url: String,
}

/// Product fields minus the id, used for create and full-replace update.
///
/// Ids are never client-supplied; the repository mints them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub category: String,
    pub image_url: String,
}

impl ProductDraft {
    /// Attach an id, producing a full product record.
    #[must_use]
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            image_url: self.image_url,
        }
    }
}
