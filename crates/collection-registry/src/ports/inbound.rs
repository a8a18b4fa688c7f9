//! Driving Ports (API - Inbound)

use crate::domain::{
    Collection, CollectionFilter, CollectionMetadata, CreateCollection, UniqueId,
    UpdateCollection,
};
use crate::error::RegistryResult;
use async_trait::async_trait;

/// Outcome of a create or get-or-create call.
#[derive(Clone, Debug, PartialEq)]
pub struct CreateOutcome {
    pub collection: Collection,
    /// `true` only when this call inserted the collection.
    pub created: bool,
}

impl CreateOutcome {
    pub fn created(collection: Collection) -> Self {
        Self {
            collection,
            created: true,
        }
    }

    pub fn existing(collection: Collection) -> Self {
        Self {
            collection,
            created: false,
        }
    }
}

/// Primary Collection Registry API.
///
/// Inputs are already validated model values; wire parsing and status
/// mapping happen in the `ipc` layer.
#[async_trait]
pub trait CollectionRegistryApi: Send + Sync {
    /// Wipe all backend state.
    async fn reset_state(&self) -> RegistryResult<()>;

    /// Plain create. A taken name fails with `UniqueConstraintViolation`.
    async fn create_collection(&self, spec: CreateCollection) -> RegistryResult<CreateOutcome>;

    /// Return the collection named `spec.name`, creating it if needed.
    ///
    /// Only `new_metadata` decides the metadata outcome; `spec.metadata` is
    /// ignored on both the create and the existing path.
    async fn get_or_create_collection(
        &self,
        spec: CreateCollection,
        new_metadata: Option<CollectionMetadata>,
    ) -> RegistryResult<CreateOutcome>;

    async fn get_collections(&self, filter: CollectionFilter) -> RegistryResult<Vec<Collection>>;

    async fn update_collection(&self, delta: UpdateCollection) -> RegistryResult<Collection>;

    async fn delete_collection(&self, id: UniqueId) -> RegistryResult<()>;
}
