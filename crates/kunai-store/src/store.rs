//! Tree operations over a storage backend.

use std::sync::Arc;

use chrono::Utc;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::backend::{MutationBatch, ResourceBackend};
use crate::error::{StoreError, StoreResult};
use crate::model::Resource;
use crate::path::ResourcePath;

/// Quoted hex SHA-256 of a file body.
#[must_use]
pub fn compute_etag(body: &[u8]) -> String {
    let digest = Sha256::digest(body);
    format!("\"{}\"", hex::encode(digest))
}

/// Tree-level storage operations.
///
/// Wraps a [`ResourceBackend`] and implements the multi-record operations the
/// protocol needs: lazy root creation, recursive delete, subtree move, and
/// file replacement. Each multi-record operation reads the affected subtree
/// first and then applies a single atomic batch.
#[derive(Clone)]
pub struct DavStore {
    backend: Arc<dyn ResourceBackend>,
}

impl DavStore {
    #[must_use]
    pub fn new(backend: Arc<dyn ResourceBackend>) -> Self {
        Self { backend }
    }

    /// Returns the root collection, creating it on first access.
    ///
    /// ## Errors
    /// Returns an error if the backend fails.
    pub async fn root(&self) -> StoreResult<Resource> {
        if let Some(existing) = self.backend.get(&ResourcePath::root()).await? {
            return Ok(existing);
        }

        tracing::debug!("Creating root collection");
        let root = Resource::new_collection(ResourcePath::root(), None);
        let mut batch = MutationBatch::new();
        batch.upsert(root.clone());
        self.backend.apply(batch).await?;
        Ok(root)
    }

    /// Looks up a resource by path. The root path always resolves.
    ///
    /// ## Errors
    /// Returns an error if the backend fails.
    pub async fn get_by_path(&self, path: &ResourcePath) -> StoreResult<Option<Resource>> {
        if path.is_root() {
            return Ok(Some(self.root().await?));
        }
        self.backend.get(path).await
    }

    /// Checks for a record at a path, optionally requiring a collection.
    ///
    /// ## Errors
    /// Returns an error if the backend fails.
    pub async fn exists_with_path(
        &self,
        path: &ResourcePath,
        collection_only: bool,
    ) -> StoreResult<bool> {
        self.backend.contains(path, collection_only).await
    }

    /// Direct children of a collection, ordered by path.
    ///
    /// ## Errors
    /// Returns an error if the backend fails.
    pub async fn children(&self, path: &ResourcePath) -> StoreResult<Vec<Resource>> {
        self.backend.children(path).await
    }

    /// Inserts or replaces a single record.
    ///
    /// ## Errors
    /// Returns an error if the backend fails.
    pub async fn save(&self, resource: Resource) -> StoreResult<()> {
        let mut batch = MutationBatch::new();
        batch.upsert(resource);
        self.backend.apply(batch).await
    }

    /// ## Summary
    /// Stores a file body and its record. Allocates a new blob, hashes the
    /// body for the etag, and writes blob and record in one batch. The
    /// caller is responsible for deleting any resource that previously
    /// lived at the path.
    ///
    /// ## Errors
    /// Returns an error if the backend fails.
    #[tracing::instrument(skip(self, body), fields(size = body.len()))]
    #[expect(
        clippy::cast_possible_wrap,
        reason = "Body sizes are bounded far below i64::MAX"
    )]
    pub async fn create_file(&self, path: ResourcePath, body: Vec<u8>) -> StoreResult<Resource> {
        let parent = path.parent();
        let blob_id = Uuid::new_v4();

        let mut resource = Resource::new_file(path, parent);
        resource.content_length = Some(body.len() as i64);
        resource.etag = Some(compute_etag(&body));
        resource.blob = Some(blob_id);

        let mut batch = MutationBatch::new();
        batch.put_blob(blob_id, body);
        batch.upsert(resource.clone());
        self.backend.apply(batch).await?;

        Ok(resource)
    }

    /// Reads the body of a file resource.
    ///
    /// ## Errors
    /// Returns [`StoreError::BlobNotFound`] if the resource has no blob or
    /// the blob is missing from the backend.
    pub async fn read_blob(&self, resource: &Resource) -> StoreResult<Vec<u8>> {
        let id = resource
            .blob
            .ok_or_else(|| StoreError::BlobNotFound(resource.path.clone()))?;
        self.backend
            .read_blob(id)
            .await?
            .ok_or_else(|| StoreError::BlobNotFound(resource.path.clone()))
    }

    /// Deletes a single record and its owned blob.
    ///
    /// Descendants are not touched; [`Self::delete_recursive`] is the
    /// cascading form.
    ///
    /// ## Errors
    /// Returns [`StoreError::NotFound`] if nothing lives at the path.
    pub async fn delete(&self, path: &ResourcePath) -> StoreResult<()> {
        let resource = self
            .backend
            .get(path)
            .await?
            .ok_or_else(|| StoreError::NotFound(path.clone()))?;

        let mut batch = MutationBatch::new();
        if let Some(blob) = resource.blob {
            batch.remove_blob(blob);
        }
        batch.remove(resource.path);
        self.backend.apply(batch).await
    }

    /// Deletes a resource and every descendant, including blobs.
    ///
    /// ## Errors
    /// Returns [`StoreError::NotFound`] if nothing lives at the path.
    #[tracing::instrument(skip(self))]
    pub async fn delete_recursive(&self, path: &ResourcePath) -> StoreResult<()> {
        let resource = self
            .backend
            .get(path)
            .await?
            .ok_or_else(|| StoreError::NotFound(path.clone()))?;

        let subtree = self.collect_subtree(resource).await?;
        tracing::debug!(count = subtree.len(), "Deleting subtree");

        // Children go before their parents so the tree never dangles.
        let mut batch = MutationBatch::new();
        for node in subtree.iter().rev() {
            if let Some(blob) = node.blob {
                batch.remove_blob(blob);
            }
            batch.remove(node.path.clone());
        }
        self.backend.apply(batch).await
    }

    /// Moves a resource and every descendant to a new path.
    ///
    /// ## Summary
    /// Rewrites the path, parent, and modification time of each node in the
    /// subtree and applies the whole rename as one batch. Assumes the
    /// destination path is free; the caller clears it first.
    ///
    /// ## Errors
    /// Returns [`StoreError::NotFound`] if nothing lives at the source path.
    #[tracing::instrument(skip(self))]
    pub async fn move_to_path(&self, from: &ResourcePath, to: &ResourcePath) -> StoreResult<()> {
        let source = self
            .backend
            .get(from)
            .await?
            .ok_or_else(|| StoreError::NotFound(from.clone()))?;

        let now = Utc::now();
        let mut moves: Vec<(Resource, ResourcePath, Option<ResourcePath>)> = Vec::new();
        let mut stack = vec![(source, to.clone(), to.parent())];

        while let Some((node, new_path, new_parent)) = stack.pop() {
            if node.is_collection {
                for child in self.backend.children(&node.path).await? {
                    let child_path = new_path.join(child.display_name());
                    stack.push((child, child_path, Some(new_path.clone())));
                }
            }
            moves.push((node, new_path, new_parent));
        }

        tracing::debug!(count = moves.len(), "Moving subtree");

        // Old paths come out before new ones land, in one atomic batch.
        let mut batch = MutationBatch::new();
        for (node, _, _) in &moves {
            batch.remove(node.path.clone());
        }
        for (mut node, new_path, new_parent) in moves {
            node.path = new_path;
            node.parent = new_parent;
            node.modified = now;
            batch.upsert(node);
        }
        self.backend.apply(batch).await
    }

    /// Collects a resource and all descendants, parents before children.
    async fn collect_subtree(&self, root: Resource) -> StoreResult<Vec<Resource>> {
        let mut out = Vec::new();
        let mut stack = vec![root];

        while let Some(node) = stack.pop() {
            if node.is_collection {
                let mut children = self.backend.children(&node.path).await?;
                stack.append(&mut children);
            }
            out.push(node);
        }

        Ok(out)
    }
}

impl std::fmt::Debug for DavStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DavStore").finish_non_exhaustive()
    }
}
