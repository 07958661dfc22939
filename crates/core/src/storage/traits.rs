use async_trait::async_trait;

use crate::item::Item;

use super::Result;

/// Item-level operations on the backing store.
///
/// Implementations translate these calls into store requests and surface
/// every failure as a [`StoreError`](super::StoreError). No retries are
/// performed; a transient failure is reported to the caller immediately.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Fetches one item by primary key. Absence is not an error.
    async fn get(&self, id: &str) -> Result<Option<Item>>;

    /// Unconditional upsert; overwrites any existing item with the same id.
    async fn put(&self, item: &Item) -> Result<()>;

    /// Rewrites exactly `title` and `description`, leaving `id` untouched.
    /// A blind write: the item is expected to exist but this is not verified.
    async fn update_fields(&self, id: &str, title: &str, description: &str) -> Result<()>;

    /// Unconditional removal by key; a missing key is not an error.
    async fn delete(&self, id: &str) -> Result<()>;

    /// Bounded full-table scan returning up to `limit` items in store-native
    /// order. No ordering guarantee.
    async fn scan(&self, limit: i32) -> Result<Vec<Item>>;
}
