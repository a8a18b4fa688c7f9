//! # Collection Registry
//!
//! Request handling and conflict resolution for a catalog of named
//! collections (id, name, topic, dimension, metadata). Storage lives behind
//! the [`CoordinatorBackend`] port; this crate owns the decisions made in
//! front of it.
//!
//! ## RPC Surface
//!
//! | Method | Behavior | Failure codes |
//! |--------|----------|---------------|
//! | `ResetState` | Wipe backend state | 500 (raw error also returned) |
//! | `CreateCollection` | Plain create, or get-or-create | 409 name taken, 500 |
//! | `GetCollections` | Conjunctive id/name/topic lookup | 500 |
//! | `DeleteCollection` | Delete by id | 404 missing, 500 |
//! | `UpdateCollection` | Rename/retopic/redimension + metadata policy | 404, 409, 500 |
//!
//! Success is always `(200, "ok")`. Failures carry the error message as the
//! reason. Malformed ids are rejected before the backend is called.
//!
//! ## Metadata Update Policy
//!
//! | reset_metadata | metadata | Outcome |
//! |----------------|----------|---------|
//! | true  | absent  | clear |
//! | true  | present | reject (`InvalidMetadataUpdate`) |
//! | false | present | replace |
//! | false | absent  | unchanged |
//!
//! ## Concurrency
//!
//! Handlers are stateless and take no locks. Get-or-create is a lookup
//! followed by a create; concurrent callers racing on a new name are
//! serialized only by the backend's uniqueness constraint, so exactly one
//! create wins. The loser gets 409 unless
//! [`RegistryConfig::retry_lookup_on_conflict`] is set.
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  ipc/       - wire payloads, codec, RegistryRpcHandler          │
//! │  adapters/  - InMemoryCoordinator                               │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses / implements ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  ports/inbound.rs  - CollectionRegistryApi                      │
//! │  ports/outbound.rs - CoordinatorBackend                         │
//! │  service.rs        - CollectionService (get-or-create resolver) │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  domain/  - UniqueId, metadata, MetadataUpdate, Status          │
//! │  error.rs - RegistryError, ErrorKind                            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use collection_registry::{
//!     CollectionService, CreateCollectionRequest, InMemoryCoordinator, RegistryConfig,
//!     RegistryRpcHandler,
//! };
//! use std::sync::Arc;
//!
//! let config = RegistryConfig::from_env();
//! let backend = Arc::new(InMemoryCoordinator::new(config.clone()));
//! let service = CollectionService::new(config, backend)?;
//! let handler = RegistryRpcHandler::new(Arc::new(service));
//!
//! let response = handler
//!     .create_collection(CreateCollectionRequest {
//!         name: "docs".into(),
//!         get_or_create: true,
//!         ..Default::default()
//!     })
//!     .await;
//! assert!(response.status.is_ok());
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod ipc;
pub mod ports;
pub mod service;

pub use adapters::InMemoryCoordinator;
pub use config::{ConfigError, RegistryConfig};
pub use domain::{
    codes, Collection, CollectionFilter, CollectionMetadata, CreateCollection, MetadataUpdate,
    MetadataValue, Status, UniqueId, UpdateCollection,
};
pub use error::{ErrorKind, RegistryError, RegistryResult};
pub use ipc::payloads::*;
pub use ipc::{RegistryRpcHandler, ResetStateFault};
pub use ports::inbound::{CollectionRegistryApi, CreateOutcome};
pub use ports::outbound::CoordinatorBackend;
pub use service::CollectionService;
