//! In-memory backend.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::{Mutation, MutationBatch, ResourceBackend};
use crate::error::StoreResult;
use crate::model::Resource;
use crate::path::ResourcePath;

/// Both tables live behind one lock so a batch is atomic by construction.
#[derive(Debug, Default)]
struct MemoryState {
    resources: BTreeMap<ResourcePath, Resource>,
    blobs: HashMap<Uuid, Vec<u8>>,
}

/// Backend holding the whole tree in process memory.
///
/// The resource table is a `BTreeMap` keyed by path, so child listings come
/// back in path order without a separate sort.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    state: RwLock<MemoryState>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of resource records currently stored.
    pub async fn resource_count(&self) -> usize {
        self.state.read().await.resources.len()
    }

    /// Number of blobs currently stored.
    pub async fn blob_count(&self) -> usize {
        self.state.read().await.blobs.len()
    }
}

#[async_trait]
impl ResourceBackend for MemoryBackend {
    async fn get(&self, path: &ResourcePath) -> StoreResult<Option<Resource>> {
        let state = self.state.read().await;
        Ok(state.resources.get(path).cloned())
    }

    async fn children(&self, parent: &ResourcePath) -> StoreResult<Vec<Resource>> {
        let state = self.state.read().await;
        let children = state
            .resources
            .values()
            .filter(|resource| resource.parent.as_ref() == Some(parent))
            .cloned()
            .collect();
        Ok(children)
    }

    async fn contains(&self, path: &ResourcePath, collection_only: bool) -> StoreResult<bool> {
        let state = self.state.read().await;
        let found = match state.resources.get(path) {
            Some(resource) => !collection_only || resource.is_collection,
            None => false,
        };
        Ok(found)
    }

    async fn read_blob(&self, id: Uuid) -> StoreResult<Option<Vec<u8>>> {
        let state = self.state.read().await;
        Ok(state.blobs.get(&id).cloned())
    }

    async fn apply(&self, batch: MutationBatch) -> StoreResult<()> {
        let mut state = self.state.write().await;
        for mutation in batch.mutations {
            match mutation {
                Mutation::Upsert(resource) => {
                    state.resources.insert(resource.path.clone(), resource);
                }
                Mutation::Remove(path) => {
                    state.resources.remove(&path);
                }
                Mutation::PutBlob { id, data } => {
                    state.blobs.insert(id, data);
                }
                Mutation::RemoveBlob(id) => {
                    state.blobs.remove(&id);
                }
            }
        }
        Ok(())
    }
}
