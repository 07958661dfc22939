use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored item.
///
/// The `id` is assigned once at creation time and is never rewritten;
/// `title` is the sole sort and filter key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl Item {
    /// Create a new item with a generated UUID.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: description.into(),
        }
    }
}
