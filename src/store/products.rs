// src/store/products.rs
use std::collections::HashSet;

use tracing::warn;

use super::KeyValueStore;
use crate::error::StoreError;
use crate::models::product::Product;

pub const DEFAULT_KEY: &str = "products";

/// The product collection as one JSON array under a single store key.
#[derive(Debug)]
pub struct ProductStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ProductStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads the stored collection. Anything unusable (missing entry,
    /// `null`, bad JSON, a read failure) loads as an empty collection.
    /// Records repeating an earlier id are dropped.
    pub fn load(&self) -> Vec<Product> {
        let raw = match self.store.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read stored products");
                return Vec::new();
            }
        };

        let products: Vec<Product> = match serde_json::from_str::<Option<Vec<Product>>>(&raw) {
            Ok(products) => products.unwrap_or_default(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "Stored products are malformed, starting empty");
                return Vec::new();
            }
        };

        let mut seen = HashSet::new();
        products
            .into_iter()
            .filter(|p| {
                let fresh = seen.insert(p.id.clone());
                if !fresh {
                    warn!(id = %p.id, "Dropping stored product with duplicate id");
                }
                fresh
            })
            .collect()
    }

    pub fn save(&mut self, products: &[Product]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(products)?;
        self.store.set_item(&self.key, &raw)
    }

    /// The raw stored text, as the backing store holds it.
    pub fn raw(&self) -> Result<Option<String>, StoreError> {
        self.store.get_item(&self.key)
    }
}
