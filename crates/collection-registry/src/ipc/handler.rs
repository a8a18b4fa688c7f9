//! RPC handler for the Collection Registry.
//!
//! Parses wire input, delegates to [`CollectionRegistryApi`], and turns every
//! outcome into a response carrying a [`Status`]. Application errors never
//! escape as faults; the one exception is `reset_state`, which also hands the
//! raw error back so a failed wipe cannot be masked.

use super::codec::{decode_metadata, encode_collection};
use super::payloads::*;
use crate::domain::{
    CollectionFilter, CollectionMetadata, CreateCollection, MetadataUpdate, Status, UniqueId,
    UpdateCollection,
};
use crate::error::{RegistryError, RegistryResult};
use crate::ports::inbound::{CollectionRegistryApi, CreateOutcome};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error};

/// Failed `ResetState`: the status-bearing response plus the raw error.
#[derive(Debug, Error)]
#[error("reset state failed: {error}")]
pub struct ResetStateFault {
    pub response: ResetStateResponse,
    #[source]
    pub error: RegistryError,
}

/// RPC handler for the collection service
pub struct RegistryRpcHandler<A>
where
    A: CollectionRegistryApi,
{
    api: Arc<A>,
}

impl<A> Clone for RegistryRpcHandler<A>
where
    A: CollectionRegistryApi,
{
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
        }
    }
}

impl<A> RegistryRpcHandler<A>
where
    A: CollectionRegistryApi,
{
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Handle ResetState.
    pub async fn reset_state(
        &self,
        _request: ResetStateRequest,
    ) -> Result<ResetStateResponse, ResetStateFault> {
        match self.api.reset_state().await {
            Ok(()) => Ok(ResetStateResponse {
                status: Status::ok(),
            }),
            Err(err) => {
                let status = failure_status("reset_state", &err);
                Err(ResetStateFault {
                    response: ResetStateResponse { status },
                    error: err,
                })
            }
        }
    }

    /// Handle CreateCollection, dispatching on `get_or_create`.
    pub async fn create_collection(
        &self,
        request: CreateCollectionRequest,
    ) -> CreateCollectionResponse {
        match self.try_create_collection(&request).await {
            Ok(outcome) => CreateCollectionResponse {
                collection: encode_collection(&outcome.collection),
                created: outcome.created,
                status: Status::ok(),
            },
            Err(err) => CreateCollectionResponse {
                collection: echo_request(&request),
                created: false,
                status: failure_status("create_collection", &err),
            },
        }
    }

    async fn try_create_collection(
        &self,
        request: &CreateCollectionRequest,
    ) -> RegistryResult<CreateOutcome> {
        let id = match request.id.as_deref() {
            Some(raw) => UniqueId::parse(raw)?,
            None => UniqueId::new(),
        };
        let metadata = request
            .metadata
            .clone()
            .map(decode_metadata)
            .transpose()?;

        let mut spec = CreateCollection::new(request.name.clone()).with_id(id);
        spec.dimension = request.dimension;

        if request.get_or_create {
            self.api.get_or_create_collection(spec, metadata).await
        } else {
            spec.metadata = metadata;
            self.api.create_collection(spec).await
        }
    }

    /// Handle GetCollections.
    pub async fn get_collections(&self, request: GetCollectionsRequest) -> GetCollectionsResponse {
        let result = async {
            let filter = CollectionFilter {
                id: UniqueId::parse_optional(request.id.as_deref())?,
                name: request.name,
                topic: request.topic,
            };
            self.api.get_collections(filter).await
        }
        .await;

        match result {
            Ok(collections) => {
                debug!(count = collections.len(), "[registry] get_collections");
                GetCollectionsResponse {
                    collections: collections.iter().map(encode_collection).collect(),
                    status: Status::ok(),
                }
            }
            Err(err) => GetCollectionsResponse {
                collections: Vec::new(),
                status: failure_status("get_collections", &err),
            },
        }
    }

    /// Handle DeleteCollection.
    pub async fn delete_collection(
        &self,
        request: DeleteCollectionRequest,
    ) -> DeleteCollectionResponse {
        let result = async {
            let id = UniqueId::parse(&request.id)?;
            self.api.delete_collection(id).await
        }
        .await;

        DeleteCollectionResponse {
            status: status_of("delete_collection", result),
        }
    }

    /// Handle UpdateCollection.
    pub async fn update_collection(
        &self,
        request: UpdateCollectionRequest,
    ) -> UpdateCollectionResponse {
        let result = async {
            let id = UniqueId::parse(&request.id)?;
            // Flag/payload conflicts are rejected before any conversion work.
            let metadata: MetadataUpdate<CollectionMetadata> =
                MetadataUpdate::resolve(request.reset_metadata, request.metadata)?
                    .try_map(decode_metadata)?;
            let delta = UpdateCollection {
                id,
                name: request.name,
                topic: request.topic,
                dimension: request.dimension,
                metadata,
            };
            self.api.update_collection(delta).await.map(|_| ())
        }
        .await;

        UpdateCollectionResponse {
            status: status_of("update_collection", result),
        }
    }
}

fn status_of(method: &str, result: RegistryResult<()>) -> Status {
    match result {
        Ok(()) => Status::ok(),
        Err(err) => failure_status(method, &err),
    }
}

fn failure_status(method: &str, err: &RegistryError) -> Status {
    let status = Status::from_error(err);
    error!(
        method,
        kind = ?err.kind(),
        code = status.code,
        "[registry] {}",
        err
    );
    status
}

/// Collection echoed back on a failed create.
fn echo_request(request: &CreateCollectionRequest) -> WireCollection {
    WireCollection {
        id: request.id.clone().unwrap_or_default(),
        name: request.name.clone(),
        topic: String::new(),
        dimension: request.dimension,
        metadata: request.metadata.clone(),
    }
}
