//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and the
//! Item type. Testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

use trinket_core::item::Item;

/// Convert an Item to a DynamoDB item map.
pub fn item_to_attributes(item: &Item) -> HashMap<String, AttributeValue> {
    let mut attributes = HashMap::new();

    attributes.insert("id".to_string(), AttributeValue::S(item.id.clone()));
    attributes.insert("title".to_string(), AttributeValue::S(item.title.clone()));
    attributes.insert(
        "description".to_string(),
        AttributeValue::S(item.description.clone()),
    );

    attributes
}

/// Convert a DynamoDB item map to an Item.
///
/// A missing `title` or `description` attribute reads as an empty string; a
/// missing `id` reads as empty and the record sorts as any other.
pub fn attributes_to_item(attributes: &HashMap<String, AttributeValue>) -> Item {
    Item {
        id: get_string(attributes, "id"),
        title: get_string(attributes, "title"),
        description: get_string(attributes, "description"),
    }
}

/// Extract a string attribute, defaulting to empty when absent or non-string.
fn get_string(attributes: &HashMap<String, AttributeValue>, name: &str) -> String {
    attributes
        .get(name)
        .and_then(|value| value.as_s().ok())
        .cloned()
        .unwrap_or_default()
}
