//! Flat-file implementation of the item store.
//!
//! Records are stored one per line as
//! `id,name,createdAt,updatedAt,expiryDate` with ISO-8601 timestamps.
//! Fields are split on `,` with no escaping: a name containing the
//! delimiter corrupts its record, and the next `load_all` reports a
//! field-count mismatch. Rewrites happen in place with no temp-file
//! rename, so a crash mid-rewrite can leave the file truncated.

use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use entities::Item;
use tokio::sync::Mutex;

use crate::{ItemStore, ItemStoreError, StoreResult};

/// Render format for the two timestamp fields.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Item store backed by a single line-oriented text file.
///
/// Every operation re-reads or rewrites the whole file. All operations
/// serialize through one internal lock, so concurrent callers within the
/// process cannot interleave a read-modify-write cycle.
pub struct FlatFileStore {
    path: PathBuf,
    io_lock: Mutex<()>,
}

impl FlatFileStore {
    /// Creates a store over the given backing file. The file is not
    /// created until the first `save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            io_lock: Mutex::new(()),
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_items(&self) -> StoreResult<Vec<Item>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let mut items = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            items.push(parse_record(idx + 1, line)?);
        }
        Ok(items)
    }

    fn write_items(&self, items: &[Item]) -> StoreResult<()> {
        let mut content = String::new();
        for item in items {
            content.push_str(&format_record(item));
            content.push('\n');
        }
        std::fs::write(&self.path, content)?;
        tracing::debug!("Rewrote {} item record(s) to {:?}", items.len(), self.path);
        Ok(())
    }
}

#[async_trait]
impl ItemStore for FlatFileStore {
    async fn next_id(&self) -> StoreResult<u32> {
        let _guard = self.io_lock.lock().await;
        let items = self.read_items()?;
        Ok(items.iter().map(|item| item.id).max().map_or(1, |max| max + 1))
    }

    async fn save(&self, item: &Item) -> StoreResult<()> {
        let _guard = self.io_lock.lock().await;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", format_record(item))?;
        Ok(())
    }

    async fn load_all(&self) -> StoreResult<Vec<Item>> {
        let _guard = self.io_lock.lock().await;
        self.read_items()
    }

    async fn update(&self, item: &Item) -> StoreResult<()> {
        let _guard = self.io_lock.lock().await;
        let items: Vec<Item> = self
            .read_items()?
            .into_iter()
            .map(|existing| {
                if existing.id == item.id {
                    item.clone()
                } else {
                    existing
                }
            })
            .collect();
        self.write_items(&items)
    }

    async fn delete(&self, id: u32) -> StoreResult<()> {
        let _guard = self.io_lock.lock().await;
        let mut items = self.read_items()?;
        items.retain(|item| item.id != id);
        self.write_items(&items)
    }
}

fn format_record(item: &Item) -> String {
    format!(
        "{},{},{},{},{}",
        item.id,
        item.name,
        item.created_at.format(TIMESTAMP_FORMAT),
        item.updated_at.format(TIMESTAMP_FORMAT),
        item.expiry_date,
    )
}

fn parse_record(line_no: usize, line: &str) -> StoreResult<Item> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() != 5 {
        return Err(ItemStoreError::parse(
            line_no,
            format!("expected 5 fields, found {}", parts.len()),
        ));
    }

    let id = parts[0]
        .parse()
        .map_err(|e| ItemStoreError::parse(line_no, format!("invalid id: {e}")))?;
    let created_at = parts[2]
        .parse()
        .map_err(|e| ItemStoreError::parse(line_no, format!("invalid created_at: {e}")))?;
    let updated_at = parts[3]
        .parse()
        .map_err(|e| ItemStoreError::parse(line_no, format!("invalid updated_at: {e}")))?;
    let expiry_date = parts[4]
        .parse()
        .map_err(|e| ItemStoreError::parse(line_no, format!("invalid expiry_date: {e}")))?;

    Ok(Item {
        id,
        name: parts[1].to_string(),
        created_at,
        updated_at,
        expiry_date,
    })
}
