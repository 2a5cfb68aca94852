// src/store/mod.rs
//! Key-value persistence behind the inventory. The store only ever sees
//! string keys and string values; the product layout lives in
//! [`products::ProductStore`].

pub mod file;
pub mod products;

use std::collections::HashMap;

use crate::error::StoreError;

pub use file::FileStore;
pub use products::ProductStore;

pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

pub type DynKeyValueStore = Box<dyn KeyValueStore + Send>;

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_item(key, value)
    }
}

/// Process-local store. Nothing survives a restart.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_overwrites_values() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get_item("products").unwrap(), None);
        store.set_item("products", "[]").unwrap();
        store.set_item("products", "[1]").unwrap();
        assert_eq!(store.get_item("products").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn boxed_store_delegates() {
        let mut store: DynKeyValueStore = Box::new(MemoryStore::new().with_item("k", "v"));
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("v"));
        store.set_item("k", "w").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("w"));
    }
}
