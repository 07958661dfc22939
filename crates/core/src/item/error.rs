use thiserror::Error;

use crate::storage::StoreError;

/// Errors from item repository operations.
///
/// `TitleRequired` is a validation failure raised before any store call;
/// `Store` wraps a failure reported by the backing store.
#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Title is required")]
    TitleRequired,
    #[error(transparent)]
    Store(#[from] StoreError),
}
