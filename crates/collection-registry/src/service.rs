//! Collection Service - lifecycle logic over the coordinator backend
//!
//! ## Get-or-create
//!
//! ```text
//! lookup(name) ──0 matches──→ create(spec, metadata = new_metadata)      created = true
//!      │
//!      ├──1 match, new_metadata = None──→ existing record, no mutation   created = false
//!      ├──1 match, new_metadata = Some──→ update(metadata = Replace)     created = false
//!      └──>1 match──→ Internal error (name uniqueness broken)
//! ```
//!
//! The lookup and the create are two backend calls. Two callers can both see
//! zero matches; the backend's uniqueness constraint lets exactly one create
//! win and the other gets `UniqueConstraintViolation`. This layer adds no
//! locking since it could not cover other writers of the backend.

use crate::config::{ConfigError, RegistryConfig};
use crate::domain::{
    Collection, CollectionFilter, CollectionMetadata, CreateCollection, MetadataUpdate, UniqueId,
    UpdateCollection,
};
use crate::error::{ErrorKind, RegistryError, RegistryResult};
use crate::ports::inbound::{CollectionRegistryApi, CreateOutcome};
use crate::ports::outbound::CoordinatorBackend;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Collection Service implementation
///
/// Holds no mutable state; every call is independent and the service can be
/// shared across tasks behind an `Arc`.
pub struct CollectionService<B>
where
    B: CoordinatorBackend,
{
    config: RegistryConfig,
    backend: Arc<B>,
}

impl<B> CollectionService<B>
where
    B: CoordinatorBackend,
{
    /// Create a new collection service
    ///
    /// # Errors
    /// - `ConfigError` if `config` fails validation
    pub fn new(config: RegistryConfig, backend: Arc<B>) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(
            topic_prefix = %config.topic_prefix,
            retry_lookup_on_conflict = config.retry_lookup_on_conflict,
            "collection service configured"
        );
        Ok(Self { config, backend })
    }

    pub fn backend(&self) -> &Arc<B> {
        &self.backend
    }

    /// Collections currently registered under `name`.
    async fn lookup_by_name(&self, name: &str) -> RegistryResult<Vec<Collection>> {
        self.backend.lookup(&CollectionFilter::by_name(name)).await
    }

    /// Create path of get-or-create, including the lost-race handling.
    async fn create_for_get_or_create(
        &self,
        spec: CreateCollection,
    ) -> RegistryResult<CreateOutcome> {
        let name = spec.name.clone();
        match self.backend.create(spec).await {
            Ok(collection) => {
                info!(collection_id = %collection.id, name = %collection.name, "created collection");
                Ok(CreateOutcome::created(collection))
            }
            Err(err)
                if err.is(ErrorKind::UniqueConstraintViolation)
                    && self.config.retry_lookup_on_conflict =>
            {
                warn!(name = %name, "lost create race, returning the winning collection");
                let mut winners = self.lookup_by_name(&name).await?;
                match winners.len() {
                    1 => Ok(CreateOutcome::existing(winners.remove(0))),
                    // Winner was deleted in between; report the original conflict.
                    0 => Err(err),
                    n => Err(duplicate_names(&name, n)),
                }
            }
            Err(err) => Err(err),
        }
    }
}

fn duplicate_names(name: &str, count: usize) -> RegistryError {
    RegistryError::Internal {
        reason: format!("{count} collections share the name {name:?}"),
    }
}

#[async_trait]
impl<B> CollectionRegistryApi for CollectionService<B>
where
    B: CoordinatorBackend,
{
    async fn reset_state(&self) -> RegistryResult<()> {
        warn!("resetting coordinator backend state");
        self.backend.reset_state().await
    }

    async fn create_collection(&self, spec: CreateCollection) -> RegistryResult<CreateOutcome> {
        let collection = self.backend.create(spec).await?;
        info!(collection_id = %collection.id, name = %collection.name, "created collection");
        Ok(CreateOutcome::created(collection))
    }

    async fn get_or_create_collection(
        &self,
        spec: CreateCollection,
        new_metadata: Option<CollectionMetadata>,
    ) -> RegistryResult<CreateOutcome> {
        let mut existing = self.lookup_by_name(&spec.name).await?;

        match existing.len() {
            0 => {
                let spec = CreateCollection {
                    metadata: new_metadata,
                    ..spec
                };
                self.create_for_get_or_create(spec).await
            }
            1 => {
                let current = existing.remove(0);
                let Some(metadata) = new_metadata else {
                    debug!(collection_id = %current.id, "get-or-create found existing collection");
                    return Ok(CreateOutcome::existing(current));
                };
                let delta = UpdateCollection::metadata_only(current.id, MetadataUpdate::Replace(metadata));
                let updated = self.backend.update(delta).await?;
                info!(collection_id = %updated.id, "get-or-create replaced collection metadata");
                Ok(CreateOutcome::existing(updated))
            }
            n => Err(duplicate_names(&spec.name, n)),
        }
    }

    async fn get_collections(&self, filter: CollectionFilter) -> RegistryResult<Vec<Collection>> {
        let collections = self.backend.lookup(&filter).await?;
        debug!(count = collections.len(), "collection lookup");
        Ok(collections)
    }

    async fn update_collection(&self, delta: UpdateCollection) -> RegistryResult<Collection> {
        let id = delta.id;
        let updated = self.backend.update(delta).await?;
        info!(collection_id = %id, "updated collection");
        Ok(updated)
    }

    async fn delete_collection(&self, id: UniqueId) -> RegistryResult<()> {
        self.backend.delete(id).await?;
        info!(collection_id = %id, "deleted collection");
        Ok(())
    }
}
