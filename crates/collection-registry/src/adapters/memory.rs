use crate::config::RegistryConfig;
use crate::domain::{Collection, CollectionFilter, CreateCollection, UniqueId, UpdateCollection};
use crate::error::{RegistryError, RegistryResult};
use crate::ports::outbound::CoordinatorBackend;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

/// In-memory coordinator backend.
///
/// All records sit behind one lock, so the name check and insert in `create`
/// happen under a single write guard. Lookups return insertion order.
pub struct InMemoryCoordinator {
    config: RegistryConfig,
    collections: RwLock<Vec<Collection>>,
    writes: AtomicU64,
}

impl InMemoryCoordinator {
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            config,
            collections: RwLock::new(Vec::new()),
            writes: AtomicU64::new(0),
        }
    }

    /// Number of live collections.
    pub fn len(&self) -> usize {
        self.collections.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.read().is_empty()
    }

    /// Successful mutations (create, update, delete, reset) so far.
    pub fn write_count(&self) -> u64 {
        self.writes.load(Ordering::SeqCst)
    }

    fn check_name(&self, name: &str) -> RegistryResult<()> {
        if name.is_empty() {
            return Err(RegistryError::Backend {
                reason: "collection name cannot be empty".to_string(),
            });
        }
        if name.len() > self.config.max_name_length {
            return Err(RegistryError::Backend {
                reason: format!(
                    "collection name is {} bytes, limit is {}",
                    name.len(),
                    self.config.max_name_length
                ),
            });
        }
        Ok(())
    }

    fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::SeqCst);
    }
}

impl Default for InMemoryCoordinator {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

#[async_trait]
impl CoordinatorBackend for InMemoryCoordinator {
    async fn lookup(&self, filter: &CollectionFilter) -> RegistryResult<Vec<Collection>> {
        Ok(self
            .collections
            .read()
            .iter()
            .filter(|c| filter.matches(c))
            .cloned()
            .collect())
    }

    async fn create(&self, spec: CreateCollection) -> RegistryResult<Collection> {
        self.check_name(&spec.name)?;
        let id = if spec.id.is_nil() {
            UniqueId::new()
        } else {
            spec.id
        };

        let mut collections = self.collections.write();
        if collections.iter().any(|c| c.name == spec.name) {
            return Err(RegistryError::UniqueConstraintViolation { name: spec.name });
        }
        if collections.iter().any(|c| c.id == id) {
            return Err(RegistryError::Backend {
                reason: format!("collection id {id} is already in use"),
            });
        }

        let collection = Collection {
            id,
            topic: format!("{}{}", self.config.topic_prefix, id),
            name: spec.name,
            dimension: spec.dimension,
            metadata: spec.metadata,
        };
        collections.push(collection.clone());
        self.record_write();
        Ok(collection)
    }

    async fn update(&self, delta: UpdateCollection) -> RegistryResult<Collection> {
        if let Some(name) = &delta.name {
            self.check_name(name)?;
        }

        let mut collections = self.collections.write();
        let index = collections
            .iter()
            .position(|c| c.id == delta.id)
            .ok_or_else(|| RegistryError::NotFound {
                id: delta.id.to_string(),
            })?;
        if let Some(name) = &delta.name {
            if collections.iter().any(|c| c.name == *name && c.id != delta.id) {
                return Err(RegistryError::UniqueConstraintViolation { name: name.clone() });
            }
        }

        let target = &mut collections[index];
        if let Some(name) = delta.name {
            target.name = name;
        }
        if let Some(topic) = delta.topic {
            target.topic = topic;
        }
        if let Some(dimension) = delta.dimension {
            target.dimension = Some(dimension);
        }
        target.metadata = delta.metadata.apply(target.metadata.take());

        let updated = target.clone();
        self.record_write();
        Ok(updated)
    }

    async fn delete(&self, id: UniqueId) -> RegistryResult<()> {
        let mut collections = self.collections.write();
        let index = collections
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| RegistryError::NotFound { id: id.to_string() })?;
        collections.remove(index);
        self.record_write();
        Ok(())
    }

    async fn reset_state(&self) -> RegistryResult<()> {
        self.collections.write().clear();
        self.record_write();
        Ok(())
    }
}
