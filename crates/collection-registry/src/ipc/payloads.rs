//! # RPC Message Payloads
//!
//! Request/response types for the collection RPC surface. Every response
//! carries a [`Status`]. Identifiers travel as strings and are parsed by the
//! handler.

use crate::domain::Status;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Wire form of one metadata value. Exactly one field must be set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WireMetadataValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub int_value: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub float_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bool_value: Option<bool>,
}

/// Wire form of collection metadata.
pub type WireMetadata = HashMap<String, WireMetadataValue>;

/// Collection as returned to callers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WireCollection {
    pub id: String,
    pub name: String,
    pub topic: String,
    pub dimension: Option<i32>,
    pub metadata: Option<WireMetadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResetStateRequest {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResetStateResponse {
    pub status: Status,
}

/// Request to create a collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCollectionRequest {
    /// Caller-chosen id; generated when absent.
    pub id: Option<String>,
    pub name: String,
    pub dimension: Option<i32>,
    pub metadata: Option<WireMetadata>,
    /// Return or update an existing collection of the same name instead of
    /// failing with a conflict.
    #[serde(default)]
    pub get_or_create: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCollectionResponse {
    /// On failure, echoes the request fields.
    pub collection: WireCollection,
    pub created: bool,
    pub status: Status,
}

/// Conjunctive lookup; absent fields are unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetCollectionsRequest {
    pub id: Option<String>,
    pub name: Option<String>,
    pub topic: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetCollectionsResponse {
    pub collections: Vec<WireCollection>,
    pub status: Status,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteCollectionRequest {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteCollectionResponse {
    pub status: Status,
}

/// Request to update a collection.
///
/// `reset_metadata` and `metadata` are mutually exclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateCollectionRequest {
    pub id: String,
    pub name: Option<String>,
    pub topic: Option<String>,
    pub dimension: Option<i32>,
    pub metadata: Option<WireMetadata>,
    #[serde(default)]
    pub reset_metadata: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateCollectionResponse {
    pub status: Status,
}
