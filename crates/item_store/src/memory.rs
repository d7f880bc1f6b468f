//! In-memory item store for tests and development.

use std::sync::RwLock;

use async_trait::async_trait;
use entities::Item;

use crate::{ItemStore, StoreResult};

/// In-memory implementation preserving insertion order and the flat-file
/// update/delete semantics.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<Vec<Item>>,
}

impl MemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn next_id(&self) -> StoreResult<u32> {
        let items = self.items.read().unwrap();
        Ok(items.iter().map(|item| item.id).max().map_or(1, |max| max + 1))
    }

    async fn save(&self, item: &Item) -> StoreResult<()> {
        let mut items = self.items.write().unwrap();
        items.push(item.clone());
        Ok(())
    }

    async fn load_all(&self) -> StoreResult<Vec<Item>> {
        let items = self.items.read().unwrap();
        Ok(items.clone())
    }

    async fn update(&self, item: &Item) -> StoreResult<()> {
        let mut items = self.items.write().unwrap();
        for existing in items.iter_mut() {
            if existing.id == item.id {
                *existing = item.clone();
            }
        }
        Ok(())
    }

    async fn delete(&self, id: u32) -> StoreResult<()> {
        let mut items = self.items.write().unwrap();
        items.retain(|item| item.id != id);
        Ok(())
    }
}
