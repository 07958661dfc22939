use std::env;

use anyhow::{bail, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the backing DynamoDB table (required)
    pub table_name: String,
    /// Display label shown in the UI (default: none)
    pub server_id: Option<String>,
    /// AWS region for the store connection (default: "us-east-1")
    pub region: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DDB_TABLE` - Backing table name (required; startup fails without it)
    /// - `SERVER_ID` - Display label shown in the UI (optional)
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    pub fn from_env() -> Result<Self> {
        let Ok(table_name) = env::var("DDB_TABLE") else {
            bail!("Environment variable DDB_TABLE must be set");
        };

        Ok(Self {
            table_name,
            server_id: env::var("SERVER_ID").ok(),
            region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
        })
    }
}
