use std::sync::Arc;

use chrono::{Local, NaiveDate};
use entities::{Item, ItemError};
use item_store::{ItemStore, ItemStoreError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Store error: {0}")]
    Store(#[from] ItemStoreError),
    #[error("Invalid item: {0}")]
    InvalidItem(#[from] ItemError),
}

pub type InventoryResult<T> = Result<T, InventoryError>;

/// Column the item table is sorted by. Ascending only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    ExpiryDate,
}

/// Search and sort options for listing items.
#[derive(Debug, Clone, Default)]
pub struct ItemQuery {
    /// Case-insensitive substring matched against every displayed field.
    pub search: Option<String>,
    /// Sort column.
    pub sort: SortKey,
}

impl ItemQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn sort_by(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }
}

/// Service for managing inventory items.
/// The surface consumed by the table UI: create, edit, delete, and the
/// filtered/sorted listing behind the table model.
pub struct InventoryService {
    store: Arc<dyn ItemStore>,
}

impl InventoryService {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    /// Creates a new item under the next free id and stores it.
    pub async fn create_item(&self, name: &str, expiry_date: NaiveDate) -> InventoryResult<Item> {
        let id = self.store.next_id().await?;
        let now = Local::now().naive_local();
        let item = Item::builder()
            .id(id)
            .name(name)
            .created_at(now)
            .updated_at(now)
            .expiry_date(expiry_date)
            .build()?;

        self.store.save(&item).await?;
        Ok(item)
    }

    /// Applies new user-entered values to the item with the given id,
    /// keeping its creation timestamp and refreshing `updated_at`.
    /// Returns `Ok(None)` when no such item exists.
    pub async fn edit_item(
        &self,
        id: u32,
        name: &str,
        expiry_date: NaiveDate,
    ) -> InventoryResult<Option<Item>> {
        let existing = match self
            .store
            .load_all()
            .await?
            .into_iter()
            .find(|item| item.id == id)
        {
            Some(item) => item,
            None => return Ok(None),
        };

        let item = Item::builder()
            .id(id)
            .name(name)
            .created_at(existing.created_at)
            .updated_at(Local::now().naive_local())
            .expiry_date(expiry_date)
            .build()?;

        self.store.update(&item).await?;
        Ok(Some(item))
    }

    /// Deletes the item with the given id.
    pub async fn delete_item(&self, id: u32) -> InventoryResult<()> {
        self.store.delete(id).await?;
        Ok(())
    }

    /// Loads items for display: filtered by the query's search text and
    /// sorted ascending by its sort column.
    pub async fn list_items(&self, query: &ItemQuery) -> InventoryResult<Vec<Item>> {
        let mut items = self.store.load_all().await?;

        if let Some(search) = query.search.as_deref().filter(|s| !s.is_empty()) {
            let needle = search.to_lowercase();
            items.retain(|item| matches_search(item, &needle));
        }

        match query.sort {
            SortKey::Name => items.sort_by(|a, b| a.name.cmp(&b.name)),
            SortKey::ExpiryDate => items.sort_by(|a, b| a.expiry_date.cmp(&b.expiry_date)),
        }

        Ok(items)
    }
}

/// Matches the lowercased needle against every field as displayed in the
/// item table.
fn matches_search(item: &Item, needle: &str) -> bool {
    item.id.to_string().contains(needle)
        || item.name.to_lowercase().contains(needle)
        || item.created_at.to_string().to_lowercase().contains(needle)
        || item.updated_at.to_string().to_lowercase().contains(needle)
        || item.expiry_date.to_string().contains(needle)
}

#[cfg(test)]
mod tests {
    use item_store::MemoryStore;

    use super::*;

    fn service() -> InventoryService {
        InventoryService::new(Arc::new(MemoryStore::new()))
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let service = service();

        let first = service.create_item("Milk", date("2024-06-10")).await.unwrap();
        let second = service.create_item("Bread", date("2024-06-12")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_create_rejects_empty_name() {
        let service = service();

        let err = service.create_item("", date("2024-06-10")).await.unwrap_err();
        assert!(matches!(err, InventoryError::InvalidItem(ItemError::EmptyName)));
    }

    #[tokio::test]
    async fn test_edit_preserves_creation_timestamp() {
        let service = service();

        let created = service.create_item("Milk", date("2024-06-10")).await.unwrap();
        let edited = service
            .edit_item(created.id, "Whole Milk", date("2024-06-15"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(edited.created_at, created.created_at);
        assert_eq!(edited.name, "Whole Milk");
        assert_eq!(edited.expiry_date, date("2024-06-15"));
        assert!(edited.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_edit_of_unknown_id_reports_none() {
        let service = service();
        service.create_item("Milk", date("2024-06-10")).await.unwrap();

        let outcome = service.edit_item(99, "Ghost", date("2024-06-10")).await.unwrap();
        assert!(outcome.is_none());

        let items = service.list_items(&ItemQuery::new()).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Milk");
    }

    #[tokio::test]
    async fn test_delete_removes_the_item() {
        let service = service();
        let item = service.create_item("Milk", date("2024-06-10")).await.unwrap();

        service.delete_item(item.id).await.unwrap();

        assert!(service.list_items(&ItemQuery::new()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let service = service();
        service.create_item("Milk", date("2024-06-10")).await.unwrap();
        service.create_item("Bread", date("2024-06-12")).await.unwrap();

        let query = ItemQuery::new().with_search("mIlK");
        let items = service.list_items(&query).await.unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Milk");
    }

    #[tokio::test]
    async fn test_search_matches_displayed_dates() {
        let service = service();
        service.create_item("Milk", date("2024-06-10")).await.unwrap();
        service.create_item("Bread", date("2025-01-01")).await.unwrap();

        let query = ItemQuery::new().with_search("2025-01");
        let items = service.list_items(&query).await.unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Bread");
    }

    #[tokio::test]
    async fn test_listing_sorts_ascending() {
        let service = service();
        service.create_item("Yogurt", date("2024-06-09")).await.unwrap();
        service.create_item("Bread", date("2024-06-12")).await.unwrap();
        service.create_item("Milk", date("2024-06-10")).await.unwrap();

        let by_name = service
            .list_items(&ItemQuery::new().sort_by(SortKey::Name))
            .await
            .unwrap();
        let names: Vec<&str> = by_name.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Bread", "Milk", "Yogurt"]);

        let by_expiry = service
            .list_items(&ItemQuery::new().sort_by(SortKey::ExpiryDate))
            .await
            .unwrap();
        let names: Vec<&str> = by_expiry.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Yogurt", "Milk", "Bread"]);
    }
}
