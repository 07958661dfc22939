//! Shared application state.
//!
//! Built once at process start and cloned into each request handler; the
//! store client is the only shared resource and lives behind an `Arc`.

use std::sync::Arc;

use crate::config::Config;
use crate::repository::ItemRepository;
use crate::storage::DynamoStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Item repository over the configured store.
    pub items: ItemRepository,
    /// Name of the backing table, reported by the health endpoint.
    pub table_name: String,
    /// Display label shown in the UI.
    pub server_id: Option<String>,
}

impl AppState {
    /// Creates AppState backed by DynamoDB, per the given configuration.
    pub async fn from_config(config: &Config) -> Result<Self, anyhow::Error> {
        let store = Arc::new(DynamoStore::from_config(config).await);

        Ok(Self {
            items: ItemRepository::new(store),
            table_name: config.table_name.clone(),
            server_id: config.server_id.clone(),
        })
    }
}

// ============================================================================
// Test support - in-memory store doubles and a Default state for unit tests
// ============================================================================
