//! Resource records stored in the tree.

use chrono::{DateTime, Utc};
use kunai_core::constants::{COLLECTION_CONTENT_TYPE, FALLBACK_CONTENT_TYPE};

use crate::path::ResourcePath;

/// One node in the tree, either a collection or a file.
///
/// The record carries the full path rather than just the name, so lookups
/// are a single keyed read. File bodies live in a separate blob table keyed
/// by [`Resource::blob`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub path: ResourcePath,
    /// Path of the containing collection. `None` only for the root.
    pub parent: Option<ResourcePath>,
    pub is_collection: bool,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub content_language: Option<String>,
    pub content_length: Option<i64>,
    pub content_type: Option<String>,
    pub etag: Option<String>,
    pub blob: Option<uuid::Uuid>,
}

impl Resource {
    /// Creates a collection record with fresh timestamps.
    #[must_use]
    pub fn new_collection(path: ResourcePath, parent: Option<ResourcePath>) -> Self {
        let now = Utc::now();
        Self {
            path,
            parent,
            is_collection: true,
            created: now,
            modified: now,
            content_language: None,
            content_length: None,
            content_type: None,
            etag: None,
            blob: None,
        }
    }

    /// Creates a file record with fresh timestamps and no body yet.
    #[must_use]
    pub fn new_file(path: ResourcePath, parent: Option<ResourcePath>) -> Self {
        let now = Utc::now();
        Self {
            path,
            parent,
            is_collection: false,
            created: now,
            modified: now,
            content_language: None,
            content_length: None,
            content_type: None,
            etag: None,
            blob: None,
        }
    }

    /// The final path segment. Empty for the root.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.path.name()
    }

    /// Content type derived from the path's extension.
    ///
    /// Collections always report the directory type. Files fall back to
    /// `application/octet-stream` when the extension is unknown.
    #[must_use]
    pub fn content_type_or_default(&self) -> &'static str {
        if self.is_collection {
            COLLECTION_CONTENT_TYPE
        } else {
            mime_guess::from_path(self.path.as_str())
                .first_raw()
                .unwrap_or(FALLBACK_CONTENT_TYPE)
        }
    }
}
