//! Inventory item entity definitions.

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when constructing an [`Item`] from incomplete or
/// inconsistent fields.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemError {
    /// A required field was never supplied to the builder.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Item ids start at 1.
    #[error("item id must be positive")]
    ZeroId,

    /// The item name must be a non-empty label.
    #[error("item name must not be empty")]
    EmptyName,

    /// `updated_at` must never precede `created_at`.
    #[error("updated_at precedes created_at")]
    TimestampOrder,
}

/// A single inventory record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, assigned once and never changed.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// When this record was created.
    pub created_at: NaiveDateTime,
    /// When this record was last updated.
    pub updated_at: NaiveDateTime,
    /// Calendar date the item expires.
    pub expiry_date: NaiveDate,
}

impl Item {
    /// Starts building a new item.
    pub fn builder() -> ItemBuilder {
        ItemBuilder::default()
    }

    /// Creates an item with both timestamps stamped from the local clock.
    pub fn new(id: u32, name: impl Into<String>, expiry_date: NaiveDate) -> Result<Self, ItemError> {
        let now = Local::now().naive_local();
        Self::builder()
            .id(id)
            .name(name)
            .created_at(now)
            .updated_at(now)
            .expiry_date(expiry_date)
            .build()
    }

    /// Refreshes the update timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Local::now().naive_local();
    }
}

/// Builder for [`Item`]. `build` fails unless every field is present and
/// consistent; a record with missing fields is not a valid item.
#[derive(Debug, Default)]
pub struct ItemBuilder {
    id: Option<u32>,
    name: Option<String>,
    created_at: Option<NaiveDateTime>,
    updated_at: Option<NaiveDateTime>,
    expiry_date: Option<NaiveDate>,
}

impl ItemBuilder {
    /// Sets the item id.
    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the item name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: NaiveDateTime) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Sets the update timestamp.
    pub fn updated_at(mut self, updated_at: NaiveDateTime) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    /// Sets the expiry date.
    pub fn expiry_date(mut self, expiry_date: NaiveDate) -> Self {
        self.expiry_date = Some(expiry_date);
        self
    }

    /// Validates the collected fields and produces the item.
    pub fn build(self) -> Result<Item, ItemError> {
        let id = self.id.ok_or(ItemError::MissingField("id"))?;
        if id == 0 {
            return Err(ItemError::ZeroId);
        }
        let name = self.name.ok_or(ItemError::MissingField("name"))?;
        if name.is_empty() {
            return Err(ItemError::EmptyName);
        }
        let created_at = self.created_at.ok_or(ItemError::MissingField("created_at"))?;
        let updated_at = self.updated_at.ok_or(ItemError::MissingField("updated_at"))?;
        if updated_at < created_at {
            return Err(ItemError::TimestampOrder);
        }
        let expiry_date = self.expiry_date.ok_or(ItemError::MissingField("expiry_date"))?;

        Ok(Item {
            id,
            name,
            created_at,
            updated_at,
            expiry_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;

    fn dt(s: &str) -> NaiveDateTime {
        s.parse().unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_builder_produces_item() {
        let item = Item::builder()
            .id(3)
            .name("Milk")
            .created_at(dt("2024-06-01T09:30:00"))
            .updated_at(dt("2024-06-02T10:00:00"))
            .expiry_date(date("2024-06-10"))
            .build()
            .unwrap();

        assert_eq!(item.id, 3);
        assert_eq!(item.name, "Milk");
        assert_eq!(item.expiry_date, date("2024-06-10"));
    }

    #[test]
    fn test_builder_rejects_missing_fields() {
        let err = Item::builder().id(1).name("Milk").build().unwrap_err();
        assert_eq!(err, ItemError::MissingField("created_at"));

        let err = Item::builder().build().unwrap_err();
        assert_eq!(err, ItemError::MissingField("id"));
    }

    #[test]
    fn test_builder_rejects_empty_name() {
        let err = Item::builder()
            .id(1)
            .name("")
            .created_at(dt("2024-06-01T09:30:00"))
            .updated_at(dt("2024-06-01T09:30:00"))
            .expiry_date(date("2024-06-10"))
            .build()
            .unwrap_err();
        assert_eq!(err, ItemError::EmptyName);
    }

    #[test]
    fn test_builder_rejects_zero_id() {
        let err = Item::builder()
            .id(0)
            .name("Milk")
            .created_at(dt("2024-06-01T09:30:00"))
            .updated_at(dt("2024-06-01T09:30:00"))
            .expiry_date(date("2024-06-10"))
            .build()
            .unwrap_err();
        assert_eq!(err, ItemError::ZeroId);
    }

    #[test]
    fn test_builder_rejects_backwards_timestamps() {
        let err = Item::builder()
            .id(1)
            .name("Milk")
            .created_at(dt("2024-06-02T00:00:00"))
            .updated_at(dt("2024-06-01T00:00:00"))
            .expiry_date(date("2024-06-10"))
            .build()
            .unwrap_err();
        assert_eq!(err, ItemError::TimestampOrder);
    }

    #[test]
    fn test_new_stamps_matching_timestamps() {
        let item = Item::new(1, "Milk", date("2024-06-10")).unwrap();
        assert_eq!(item.created_at, item.updated_at);
    }

    #[test]
    fn test_touch_advances_updated_at() {
        let mut item = Item::builder()
            .id(1)
            .name("Milk")
            .created_at(dt("2024-06-01T09:30:00"))
            .updated_at(dt("2024-06-01T09:30:00"))
            .expiry_date(date("2024-06-10"))
            .build()
            .unwrap();

        item.touch();
        assert!(item.updated_at >= item.created_at);
    }
}
