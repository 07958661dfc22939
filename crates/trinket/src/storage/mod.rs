//! Storage backend implementation.
//!
//! Provides the DynamoDB implementation of the `ItemStore` trait defined in
//! `trinket_core::storage`.

pub mod dynamodb;

pub use dynamodb::DynamoStore;
