//! Storage backend abstraction.
//!
//! A backend owns the resource table and the blob table. All writes go
//! through [`ResourceBackend::apply`] as a [`MutationBatch`], which a backend
//! must apply atomically so that tree operations (recursive delete, subtree
//! move, file replace) never leave partial state behind.

pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StoreResult;
use crate::model::Resource;
use crate::path::ResourcePath;

/// A single write against the resource or blob table.
#[derive(Debug, Clone)]
pub enum Mutation {
    /// Insert or replace the record at its path.
    Upsert(Resource),
    /// Remove the record at this path, if present.
    Remove(ResourcePath),
    /// Insert or replace a blob.
    PutBlob { id: Uuid, data: Vec<u8> },
    /// Remove a blob, if present.
    RemoveBlob(Uuid),
}

/// An ordered group of writes applied as one atomic unit.
#[derive(Debug, Clone, Default)]
pub struct MutationBatch {
    pub mutations: Vec<Mutation>,
}

impl MutationBatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&mut self, resource: Resource) {
        self.mutations.push(Mutation::Upsert(resource));
    }

    pub fn remove(&mut self, path: ResourcePath) {
        self.mutations.push(Mutation::Remove(path));
    }

    pub fn put_blob(&mut self, id: Uuid, data: Vec<u8>) {
        self.mutations.push(Mutation::PutBlob { id, data });
    }

    pub fn remove_blob(&mut self, id: Uuid) {
        self.mutations.push(Mutation::RemoveBlob(id));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mutations.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.mutations.len()
    }
}

/// Resource and blob storage.
///
/// This trait is object-safe: handlers hold an `Arc<dyn ResourceBackend>`.
#[async_trait]
pub trait ResourceBackend: Send + Sync {
    /// Reads the record at a path.
    ///
    /// ## Errors
    /// Returns an error if the backend fails; a missing record is `Ok(None)`.
    async fn get(&self, path: &ResourcePath) -> StoreResult<Option<Resource>>;

    /// Reads the direct children of a collection, ordered by path.
    ///
    /// ## Errors
    /// Returns an error if the backend fails.
    async fn children(&self, parent: &ResourcePath) -> StoreResult<Vec<Resource>>;

    /// Checks whether a record exists at a path, optionally requiring it to
    /// be a collection.
    ///
    /// ## Errors
    /// Returns an error if the backend fails.
    async fn contains(&self, path: &ResourcePath, collection_only: bool) -> StoreResult<bool>;

    /// Reads a blob by id.
    ///
    /// ## Errors
    /// Returns an error if the backend fails; a missing blob is `Ok(None)`.
    async fn read_blob(&self, id: Uuid) -> StoreResult<Option<Vec<u8>>>;

    /// Applies a batch of writes atomically, in order.
    ///
    /// ## Errors
    /// Returns an error if the backend fails. On error no mutation from the
    /// batch is visible.
    async fn apply(&self, batch: MutationBatch) -> StoreResult<()>;
}
