use thiserror::Error;

use crate::path::ResourcePath;

/// Storage layer errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Resource not found: {0}")]
    NotFound(ResourcePath),

    #[error("Blob not found for resource: {0}")]
    BlobNotFound(ResourcePath),

    #[error("Parent collection missing for: {0}")]
    ParentMissing(ResourcePath),

    #[error("Invalid resource path: {0}")]
    InvalidPath(String),

    #[error(transparent)]
    CoreError(#[from] kunai_core::error::CoreError),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
