//! Item store trait definitions.

use async_trait::async_trait;
use entities::Item;

use crate::StoreResult;

/// Trait for item storage operations.
///
/// The backing collection is treated as the single source of truth: every
/// operation re-reads or rewrites the full record set, and no cache
/// survives between calls.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Returns the next free item id: 1 for an empty store, otherwise the
    /// highest existing id plus one.
    async fn next_id(&self) -> StoreResult<u32>;

    /// Appends a new item to the store.
    async fn save(&self, item: &Item) -> StoreResult<()>;

    /// Loads every stored item in storage order. An absent backing file is
    /// an empty store, not an error.
    async fn load_all(&self) -> StoreResult<Vec<Item>>;

    /// Replaces the stored record carrying `item.id`, leaving every other
    /// record unchanged and in its original position. If no record matches,
    /// nothing is added; the store is rewritten with identical content.
    async fn update(&self, item: &Item) -> StoreResult<()>;

    /// Removes every record with the given id.
    async fn delete(&self, id: u32) -> StoreResult<()>;
}
