//! Conversion between wire payloads and domain types.

use super::payloads::{WireCollection, WireMetadata, WireMetadataValue};
use crate::domain::{Collection, CollectionMetadata, MetadataValue};
use crate::error::{RegistryError, RegistryResult};

/// Decode wire metadata, rejecting the first malformed entry.
///
/// # Errors
/// - `MetadataConversion` if a value has zero or several fields set, or a
///   non-finite float
pub fn decode_metadata(wire: WireMetadata) -> RegistryResult<CollectionMetadata> {
    wire.into_iter()
        .map(|(key, value)| {
            let value = decode_value(&key, value)?;
            Ok((key, value))
        })
        .collect()
}

pub fn decode_value(key: &str, value: WireMetadataValue) -> RegistryResult<MetadataValue> {
    let WireMetadataValue {
        string_value,
        int_value,
        float_value,
        bool_value,
    } = value;

    let mut decoded = [
        string_value.map(MetadataValue::Str),
        int_value.map(MetadataValue::Int),
        float_value.map(MetadataValue::Float),
        bool_value.map(MetadataValue::Bool),
    ]
    .into_iter()
    .flatten();

    let conversion_error = |reason: &str| RegistryError::MetadataConversion {
        key: key.to_string(),
        reason: reason.to_string(),
    };

    let value = decoded
        .next()
        .ok_or_else(|| conversion_error("no value set"))?;
    if decoded.next().is_some() {
        return Err(conversion_error("more than one value set"));
    }
    if let MetadataValue::Float(f) = value {
        if !f.is_finite() {
            return Err(conversion_error("float value must be finite"));
        }
    }
    Ok(value)
}

pub fn encode_value(value: &MetadataValue) -> WireMetadataValue {
    match value {
        MetadataValue::Str(v) => WireMetadataValue {
            string_value: Some(v.clone()),
            ..Default::default()
        },
        MetadataValue::Int(v) => WireMetadataValue {
            int_value: Some(*v),
            ..Default::default()
        },
        MetadataValue::Float(v) => WireMetadataValue {
            float_value: Some(*v),
            ..Default::default()
        },
        MetadataValue::Bool(v) => WireMetadataValue {
            bool_value: Some(*v),
            ..Default::default()
        },
    }
}

pub fn encode_metadata(metadata: &CollectionMetadata) -> WireMetadata {
    metadata
        .iter()
        .map(|(k, v)| (k.clone(), encode_value(v)))
        .collect()
}

pub fn encode_collection(collection: &Collection) -> WireCollection {
    WireCollection {
        id: collection.id.to_string(),
        name: collection.name.clone(),
        topic: collection.topic.clone(),
        dimension: collection.dimension,
        metadata: collection.metadata.as_ref().map(encode_metadata),
    }
}
