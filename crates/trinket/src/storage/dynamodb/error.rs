//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to the single `StoreError` from `trinket_core`.
//! The mapped message carries the operation name and the service error
//! detail for server-side logs.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::{ProvideErrorMetadata, SdkError};

use trinket_core::storage::StoreError;

/// Map an SDK error for the named operation to a StoreError.
///
/// Service errors keep their code and message; dispatch/timeout errors fall
/// back to the SDK's own rendering.
pub fn map_sdk_error<E, R>(operation: &'static str, err: SdkError<E, R>) -> StoreError
where
    E: ProvideErrorMetadata + Debug,
    R: Debug,
{
    let detail = match (err.code(), err.message()) {
        (Some(code), Some(message)) => format!("{code}: {message}"),
        (Some(code), None) => code.to_string(),
        _ => format!("{err:?}"),
    };

    StoreError::new(format!("{operation} failed: {detail}"))
}
