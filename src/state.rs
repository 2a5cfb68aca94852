// src/state.rs
use std::sync::{Arc, Mutex, MutexGuard};

use crate::config::Config;
use crate::error::{AppError, StoreError};
use crate::services::inventory::InventoryManager;
use crate::store::{DynKeyValueStore, FileStore, MemoryStore, ProductStore};
use crate::view::ViewSnapshot;

pub type Inventory = InventoryManager<DynKeyValueStore, ViewSnapshot>;

#[derive(Clone)]
pub struct AppState {
    inventory: Arc<Mutex<Inventory>>,
    pub currency: Arc<str>,
}

impl AppState {
    pub fn new(inventory: Inventory, currency: &str) -> Self {
        Self {
            inventory: Arc::new(Mutex::new(inventory)),
            currency: Arc::from(currency),
        }
    }

    /// Opens the configured store and loads the inventory from it.
    pub fn from_config(config: &Config) -> Result<Self, StoreError> {
        let store: DynKeyValueStore = match &config.store_path {
            Some(path) => Box::new(FileStore::open(path)?),
            None => Box::new(MemoryStore::new()),
        };
        let inventory = InventoryManager::initialize(
            ProductStore::new(store, config.store_key.clone()),
            ViewSnapshot::default(),
        );
        Ok(Self::new(inventory, &config.currency))
    }

    /// One request at a time gets the inventory; the guard is held for the
    /// whole operation and its redraw.
    pub fn inventory(&self) -> Result<MutexGuard<'_, Inventory>, AppError> {
        self.inventory
            .lock()
            .map_err(|_| AppError::internal("Inventory lock poisoned"))
    }
}
