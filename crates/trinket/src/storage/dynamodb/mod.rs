//! DynamoDB storage backend.

mod conversions;
mod error;
mod store;

pub use store::DynamoStore;
