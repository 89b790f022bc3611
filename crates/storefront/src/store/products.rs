//! Product repository.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use kumawat_traders_core::{Product, ProductDraft, ProductId};

/// In-memory keyed store of product records.
///
/// Listing order is unspecified. Ids are minted here on insert and are
/// never client-supplied, so `create` cannot overwrite an existing record.
#[derive(Debug, Default)]
pub struct ProductStore {
    products: RwLock<HashMap<ProductId, Product>>,
}

impl ProductStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All products.
    #[must_use]
    pub fn list(&self) -> Vec<Product> {
        self.read().values().cloned().collect()
    }

    /// Products whose category equals `category` exactly (case-sensitive,
    /// no normalization).
    #[must_use]
    pub fn list_by_category(&self, category: &str) -> Vec<Product> {
        self.read()
            .values()
            .filter(|p| p.category == category)
            .cloned()
            .collect()
    }

    /// Single lookup by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<Product> {
        self.read().get(&id).cloned()
    }

    /// Store a new product under a freshly generated id and return the
    /// stored record.
    pub fn create(&self, draft: ProductDraft) -> Product {
        let product = draft.into_product(ProductId::generate());
        self.write().insert(product.id, product.clone());
        product
    }

    /// Replace all fields of an existing product, keeping its id.
    ///
    /// Returns `None` without creating anything when the id is unknown.
    pub fn update(&self, id: ProductId, draft: ProductDraft) -> Option<Product> {
        let mut products = self.write();
        if !products.contains_key(&id) {
            return None;
        }
        let product = draft.into_product(id);
        products.insert(id, product.clone());
        Some(product)
    }

    /// Remove a product. `true` iff a record existed and was removed.
    pub fn delete(&self, id: ProductId) -> bool {
        self.write().remove(&id).is_some()
    }

    /// Number of stored products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<ProductId, Product>> {
        self.products.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<ProductId, Product>> {
        self.products.write().unwrap_or_else(PoisonError::into_inner)
    }
}
