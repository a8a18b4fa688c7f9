//! # Concurrent Get-or-Create
//!
//! Two callers issue get-or-create for the same brand-new name. Both lookups
//! are forced to complete before either create runs, which reproduces the
//! check-then-act window:
//!
//! ```text
//! caller A: lookup(name) = [] ──┐                 ┌── create ──→ created = true
//!                               ├── barrier ──────┤
//! caller B: lookup(name) = [] ──┘                 └── create ──→ 409 (or converge)
//! ```

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use collection_registry::{
        codes, Collection, CollectionFilter, CollectionService, CoordinatorBackend,
        CreateCollection, CreateCollectionRequest, InMemoryCoordinator, RegistryConfig,
        RegistryResult, RegistryRpcHandler, UniqueId, UpdateCollection,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::sync::Barrier;

    const RACERS: usize = 2;

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    /// Backend whose first `RACERS` lookups wait for each other.
    struct RacingBackend {
        inner: InMemoryCoordinator,
        barrier: Barrier,
        lookups: AtomicUsize,
    }

    impl RacingBackend {
        fn new(config: RegistryConfig) -> Self {
            Self {
                inner: InMemoryCoordinator::new(config),
                barrier: Barrier::new(RACERS),
                lookups: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl CoordinatorBackend for RacingBackend {
        async fn lookup(&self, filter: &CollectionFilter) -> RegistryResult<Vec<Collection>> {
            let result = self.inner.lookup(filter).await;
            if self.lookups.fetch_add(1, Ordering::SeqCst) < RACERS {
                self.barrier.wait().await;
            }
            result
        }

        async fn create(&self, spec: CreateCollection) -> RegistryResult<Collection> {
            self.inner.create(spec).await
        }

        async fn update(&self, delta: UpdateCollection) -> RegistryResult<Collection> {
            self.inner.update(delta).await
        }

        async fn delete(&self, id: UniqueId) -> RegistryResult<()> {
            self.inner.delete(id).await
        }

        async fn reset_state(&self) -> RegistryResult<()> {
            self.inner.reset_state().await
        }
    }

    type Handler = RegistryRpcHandler<CollectionService<RacingBackend>>;

    fn racing_handler(config: RegistryConfig) -> (Handler, Arc<RacingBackend>) {
        let backend = Arc::new(RacingBackend::new(config.clone()));
        let service = CollectionService::new(config, Arc::clone(&backend)).unwrap();
        (RegistryRpcHandler::new(Arc::new(service)), backend)
    }

    fn get_or_create(name: &str) -> CreateCollectionRequest {
        CreateCollectionRequest {
            name: name.to_string(),
            dimension: Some(8),
            get_or_create: true,
            ..Default::default()
        }
    }

    // =========================================================================
    // TESTS
    // =========================================================================

    #[tokio::test]
    async fn test_race_loser_surfaces_conflict_by_default() {
        let (handler, backend) = racing_handler(RegistryConfig::for_testing());

        let (a, b) = tokio::join!(
            handler.create_collection(get_or_create("shared")),
            handler.create_collection(get_or_create("shared")),
        );

        let winners = [&a, &b].iter().filter(|r| r.created).count();
        assert_eq!(winners, 1, "exactly one caller creates");

        let loser = if a.created { &b } else { &a };
        assert_eq!(loser.status.code, codes::CONFLICT);
        assert_eq!(backend.inner.len(), 1);
    }

    #[tokio::test]
    async fn test_race_loser_converges_with_retry_lookup() {
        let config = RegistryConfig {
            retry_lookup_on_conflict: true,
            ..RegistryConfig::for_testing()
        };
        let (handler, backend) = racing_handler(config);

        let (a, b) = tokio::join!(
            handler.create_collection(get_or_create("shared")),
            handler.create_collection(get_or_create("shared")),
        );

        assert!(a.status.is_ok(), "{:?}", a.status);
        assert!(b.status.is_ok(), "{:?}", b.status);
        assert_ne!(a.created, b.created, "exactly one caller creates");
        assert_eq!(a.collection, b.collection);
        assert_eq!(backend.inner.len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_many_spawned_callers_create_once() {
        let backend = Arc::new(InMemoryCoordinator::new(RegistryConfig::for_testing()));
        let service =
            CollectionService::new(RegistryConfig::for_testing(), Arc::clone(&backend)).unwrap();
        let handler = RegistryRpcHandler::new(Arc::new(service));

        let tasks: Vec<_> = (0..16)
            .map(|_| {
                let handler = handler.clone();
                tokio::spawn(async move { handler.create_collection(get_or_create("hot")).await })
            })
            .collect();

        let mut created = 0;
        for task in tasks {
            let response = task.await.unwrap();
            if response.created {
                created += 1;
            } else {
                // Either saw the existing record or lost the create race.
                assert!(
                    response.status.is_ok() || response.status.code == codes::CONFLICT,
                    "{:?}",
                    response.status
                );
            }
        }

        assert_eq!(created, 1);
        assert_eq!(backend.len(), 1);
    }
}
