//! Item repository: the listing/validation policy on top of the item store.

use std::sync::Arc;

use trinket_core::item::{filter_and_sort, Item, ItemError};
use trinket_core::storage::ItemStore;

/// Number of records a listing scan reads before filtering.
///
/// The cap is applied before the substring filter, so a filtered listing can
/// return fewer matches than exist beyond the scanned window. Preserved as-is
/// for parity with the original behavior.
pub const SCAN_LIMIT: i32 = 50;

/// Applies the item policies over a store client.
///
/// Cheap to clone; handlers share the underlying store through an `Arc`.
#[derive(Clone)]
pub struct ItemRepository {
    store: Arc<dyn ItemStore>,
}

impl ItemRepository {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    /// Lists up to [`SCAN_LIMIT`] items, filtered by a case-insensitive title
    /// substring and sorted ascending by title.
    ///
    /// Fail-soft: a store failure is logged and yields an empty list so the
    /// listing page never crashes.
    pub async fn list(&self, filter: &str) -> Vec<Item> {
        match self.store.scan(SCAN_LIMIT).await {
            Ok(items) => filter_and_sort(items, filter),
            Err(err) => {
                tracing::error!(error = %err, "Item scan failed");
                Vec::new()
            }
        }
    }

    /// Fetches a single item by id. Absence is `Ok(None)`.
    pub async fn get(&self, id: &str) -> Result<Option<Item>, ItemError> {
        Ok(self.store.get(id).await?)
    }

    /// Creates an item with a fresh id.
    ///
    /// Rejects with [`ItemError::TitleRequired`] before any store call when
    /// the title trims to empty.
    pub async fn create(&self, title: &str, description: &str) -> Result<Item, ItemError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ItemError::TitleRequired);
        }

        let item = Item::new(title, description.trim());
        self.store.put(&item).await?;

        tracing::info!(item_id = %item.id, "Created item");
        Ok(item)
    }

    /// Rewrites `title` and `description` of an existing item; the id is
    /// never touched. Same validation as [`create`](Self::create).
    pub async fn update(&self, id: &str, title: &str, description: &str) -> Result<(), ItemError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ItemError::TitleRequired);
        }

        self.store
            .update_fields(id, title, description.trim())
            .await?;

        tracing::info!(item_id = %id, "Updated item");
        Ok(())
    }

    /// Deletes an item unconditionally; deleting a missing id is a no-op.
    pub async fn delete(&self, id: &str) -> Result<(), ItemError> {
        self.store.delete(id).await?;

        tracing::info!(item_id = %id, "Deleted item");
        Ok(())
    }
}
