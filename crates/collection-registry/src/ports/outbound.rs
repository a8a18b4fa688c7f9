//! Driven Ports (SPI - Outbound Dependencies)

use crate::domain::{Collection, CollectionFilter, CreateCollection, UniqueId, UpdateCollection};
use crate::error::RegistryResult;
use async_trait::async_trait;

/// Coordinator Backend: owns the durable collection records.
///
/// Each method is expected to be atomic on its own. Nothing is assumed about
/// atomicity across calls; the registry never holds a lock between two of
/// them.
#[async_trait]
pub trait CoordinatorBackend: Send + Sync {
    /// Collections matching every constraint in `filter`, in backend order.
    async fn lookup(&self, filter: &CollectionFilter) -> RegistryResult<Vec<Collection>>;

    /// Insert a new collection.
    ///
    /// The name check and the insert MUST be a single atomic step: of two
    /// concurrent creates with the same name exactly one succeeds and the
    /// other fails with `UniqueConstraintViolation`.
    async fn create(&self, spec: CreateCollection) -> RegistryResult<Collection>;

    /// Apply `delta` and return the updated record.
    ///
    /// # Errors
    /// - `NotFound` if `delta.id` is not a live collection
    /// - `UniqueConstraintViolation` if a rename collides with another name
    async fn update(&self, delta: UpdateCollection) -> RegistryResult<Collection>;

    /// # Errors
    /// - `NotFound` if `id` is not a live collection
    async fn delete(&self, id: UniqueId) -> RegistryResult<()>;

    /// Wipe all state.
    async fn reset_state(&self) -> RegistryResult<()>;
}
