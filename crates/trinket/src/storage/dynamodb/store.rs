//! DynamoDB item store.
//!
//! Implements the `ItemStore` trait from `trinket_core::storage` against a
//! single table keyed by `id`.

use std::env;

use async_trait::async_trait;
use aws_sdk_dynamodb::config::{Credentials, Region};
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use trinket_core::item::Item;
use trinket_core::storage::{ItemStore, Result};

use super::conversions::{attributes_to_item, item_to_attributes};
use super::error::map_sdk_error;

use crate::config::Config;

/// DynamoDB-backed item store.
pub struct DynamoStore {
    client: Client,
    table_name: String,
}

impl DynamoStore {
    /// Creates a new store with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a store from the application configuration.
    ///
    /// Uses explicit static credentials when `AWS_ACCESS_KEY_ID` and
    /// `AWS_SECRET_ACCESS_KEY` are set, otherwise the SDK default chain.
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));

        if let (Ok(access_key), Ok(secret_key)) = (
            env::var("AWS_ACCESS_KEY_ID"),
            env::var("AWS_SECRET_ACCESS_KEY"),
        ) {
            let credentials = Credentials::from_keys(
                access_key,
                secret_key,
                env::var("AWS_SESSION_TOKEN").ok(),
            );
            loader = loader.credentials_provider(credentials);
        }

        let sdk_config = loader.load().await;
        Self::new(Client::new(&sdk_config), config.table_name.clone())
    }
}

#[async_trait]
impl ItemStore for DynamoStore {
    async fn get(&self, id: &str) -> Result<Option<Item>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|e| map_sdk_error("GetItem", e))?;

        Ok(result.item.as_ref().map(attributes_to_item))
    }

    async fn put(&self, item: &Item) -> Result<()> {
        // Unconditional upsert: no condition expression, last writer wins.
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item_to_attributes(item)))
            .send()
            .await
            .map_err(|e| map_sdk_error("PutItem", e))?;

        Ok(())
    }

    async fn update_fields(&self, id: &str, title: &str, description: &str) -> Result<()> {
        // Blind write: no existence check, the id attribute is never touched.
        self.client
            .update_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .update_expression("SET #title = :title, description = :description")
            .expression_attribute_names("#title", "title")
            .expression_attribute_values(":title", AttributeValue::S(title.to_string()))
            .expression_attribute_values(
                ":description",
                AttributeValue::S(description.to_string()),
            )
            .send()
            .await
            .map_err(|e| map_sdk_error("UpdateItem", e))?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|e| map_sdk_error("DeleteItem", e))?;

        Ok(())
    }

    async fn scan(&self, limit: i32) -> Result<Vec<Item>> {
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .limit(limit)
            .send()
            .await
            .map_err(|e| map_sdk_error("Scan", e))?;

        let items = result.items.unwrap_or_default();
        Ok(items.iter().map(attributes_to_item).collect())
    }
}
