//! Collection entities and backend inputs.

use super::identifier::UniqueId;
use super::metadata::CollectionMetadata;
use super::update_policy::MetadataUpdate;
use serde::{Deserialize, Serialize};

/// A catalog entry owned by the coordinator backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: UniqueId,
    /// Unique among live collections (enforced by the backend).
    pub name: String,
    /// Downstream routing key, assigned by the backend.
    pub topic: String,
    pub dimension: Option<i32>,
    pub metadata: Option<CollectionMetadata>,
}

/// Input for the backend's create operation.
#[derive(Clone, Debug, PartialEq)]
pub struct CreateCollection {
    pub id: UniqueId,
    pub name: String,
    pub dimension: Option<i32>,
    pub metadata: Option<CollectionMetadata>,
}

impl CreateCollection {
    /// Create spec with a freshly generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: UniqueId::new(),
            name: name.into(),
            dimension: None,
            metadata: None,
        }
    }

    pub fn with_id(mut self, id: UniqueId) -> Self {
        self.id = id;
        self
    }

    pub fn with_dimension(mut self, dimension: i32) -> Self {
        self.dimension = Some(dimension);
        self
    }

    pub fn with_metadata(mut self, metadata: CollectionMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Delta for the backend's update operation. Consumed once per call.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateCollection {
    pub id: UniqueId,
    pub name: Option<String>,
    pub topic: Option<String>,
    pub dimension: Option<i32>,
    pub metadata: MetadataUpdate,
}

impl UpdateCollection {
    /// Update that only touches metadata.
    pub fn metadata_only(id: UniqueId, metadata: MetadataUpdate) -> Self {
        Self {
            id,
            name: None,
            topic: None,
            dimension: None,
            metadata,
        }
    }
}

/// Conjunctive lookup filter. A nil id and `None` fields are unconstrained.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollectionFilter {
    pub id: UniqueId,
    pub name: Option<String>,
    pub topic: Option<String>,
}

impl CollectionFilter {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn by_id(id: UniqueId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Whether `collection` satisfies every supplied constraint.
    pub fn matches(&self, collection: &Collection) -> bool {
        (self.id.is_nil() || self.id == collection.id)
            && self.name.as_ref().map_or(true, |n| *n == collection.name)
            && self.topic.as_ref().map_or(true, |t| *t == collection.topic)
    }
}
