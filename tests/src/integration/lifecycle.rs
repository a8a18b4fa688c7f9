//! # Collection Lifecycle Flows
//!
//! Drives the RPC handler end to end over the in-memory coordinator:
//! create → lookup → get-or-create → update → delete → reset.

#[cfg(test)]
mod tests {
    use collection_registry::ipc::codec::encode_metadata;
    use collection_registry::{
        codes, CollectionService, CreateCollectionRequest, DeleteCollectionRequest,
        GetCollectionsRequest, InMemoryCoordinator, MetadataValue, RegistryConfig,
        RegistryRpcHandler, ResetStateRequest, UpdateCollectionRequest, WireMetadata,
    };
    use std::collections::HashMap;
    use std::sync::Arc;

    type Handler = RegistryRpcHandler<CollectionService<InMemoryCoordinator>>;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn handler() -> Handler {
        init_tracing();
        let config = RegistryConfig::for_testing();
        let backend = Arc::new(InMemoryCoordinator::new(config.clone()));
        let service = CollectionService::new(config, backend).unwrap();
        RegistryRpcHandler::new(Arc::new(service))
    }

    fn metadata(entries: &[(&str, MetadataValue)]) -> WireMetadata {
        let model: HashMap<String, MetadataValue> = entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        encode_metadata(&model)
    }

    #[tokio::test]
    async fn test_full_lifecycle() {
        let handler = handler();

        // Create
        let created = handler
            .create_collection(CreateCollectionRequest {
                name: "articles".into(),
                dimension: Some(384),
                metadata: Some(metadata(&[("lang", MetadataValue::Str("en".into()))])),
                ..Default::default()
            })
            .await;
        assert!(created.created);
        assert_eq!(created.status.code, codes::SUCCESS);
        assert_eq!(created.status.reason, "ok");
        let id = created.collection.id.clone();

        // Lookup by topic
        let by_topic = handler
            .get_collections(GetCollectionsRequest {
                topic: Some(created.collection.topic.clone()),
                ..Default::default()
            })
            .await;
        assert_eq!(by_topic.collections, vec![created.collection.clone()]);

        // Lookup with contradicting filters is empty, not an error
        let none = handler
            .get_collections(GetCollectionsRequest {
                id: Some(id.clone()),
                name: Some("other".into()),
                topic: None,
            })
            .await;
        assert!(none.status.is_ok());
        assert!(none.collections.is_empty());

        // Get-or-create with new metadata replaces it in place
        let replaced = handler
            .create_collection(CreateCollectionRequest {
                name: "articles".into(),
                metadata: Some(metadata(&[("lang", MetadataValue::Str("fr".into()))])),
                get_or_create: true,
                ..Default::default()
            })
            .await;
        assert!(!replaced.created);
        assert_eq!(replaced.collection.id, id);
        assert_eq!(replaced.collection.dimension, Some(384));

        // Rename and clear metadata
        let updated = handler
            .update_collection(UpdateCollectionRequest {
                id: id.clone(),
                name: Some("articles-v2".into()),
                reset_metadata: true,
                ..Default::default()
            })
            .await;
        assert!(updated.status.is_ok());

        let after = handler
            .get_collections(GetCollectionsRequest {
                name: Some("articles-v2".into()),
                ..Default::default()
            })
            .await;
        assert_eq!(after.collections.len(), 1);
        assert_eq!(after.collections[0].metadata, None);

        // Delete, then delete again
        let deleted = handler
            .delete_collection(DeleteCollectionRequest { id: id.clone() })
            .await;
        assert!(deleted.status.is_ok());
        let again = handler
            .delete_collection(DeleteCollectionRequest { id })
            .await;
        assert_eq!(again.status.code, codes::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_rename_onto_taken_name_conflicts() {
        let handler = handler();
        for name in ["a", "b"] {
            let response = handler
                .create_collection(CreateCollectionRequest {
                    name: name.into(),
                    ..Default::default()
                })
                .await;
            assert!(response.created);
        }
        let b = handler
            .get_collections(GetCollectionsRequest {
                name: Some("b".into()),
                ..Default::default()
            })
            .await
            .collections
            .remove(0);

        let response = handler
            .update_collection(UpdateCollectionRequest {
                id: b.id,
                name: Some("a".into()),
                ..Default::default()
            })
            .await;

        assert_eq!(response.status.code, codes::CONFLICT);
    }

    #[tokio::test]
    async fn test_reset_then_names_are_free_again() {
        let handler = handler();
        let request = CreateCollectionRequest {
            name: "scratch".into(),
            ..Default::default()
        };

        assert!(handler.create_collection(request.clone()).await.created);
        handler.reset_state(ResetStateRequest {}).await.unwrap();

        let all = handler.get_collections(GetCollectionsRequest::default()).await;
        assert!(all.collections.is_empty());
        assert!(handler.create_collection(request).await.created);
    }
}
