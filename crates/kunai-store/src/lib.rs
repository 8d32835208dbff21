//! Resource storage for the `WebDAV` tree.
//!
//! The tree is modeled as path-keyed [`model::Resource`] records plus a blob
//! table for file bodies, behind the [`backend::ResourceBackend`] trait.
//! [`store::DavStore`] layers tree operations (lookup, children, recursive
//! delete, subtree move) on top of whichever backend is plugged in.

pub mod backend;
pub mod error;
pub mod model;
pub mod path;
pub mod store;

pub use backend::memory::MemoryBackend;
pub use backend::{Mutation, MutationBatch, ResourceBackend};
pub use error::{StoreError, StoreResult};
pub use model::Resource;
pub use path::ResourcePath;
pub use store::{DavStore, compute_etag};
