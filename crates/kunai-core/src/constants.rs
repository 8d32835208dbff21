/// Wire-level constants shared across crates.
///
/// The `DAV` and `MS-Author-Via` headers are attached to every response;
/// several clients (Windows redirector in particular) refuse to talk to a
/// server that omits them.
pub const DAV_COMPLIANCE: &str = "1,2";
pub const MS_AUTHOR_VIA: &str = "DAV";

/// Verb set advertised by OPTIONS. COPY and PROPPATCH are announced but not
/// implemented.
pub const ALLOWED_METHODS: &str =
    "GET, PUT, DELETE, MKCOL, OPTIONS, COPY, MOVE, PROPFIND, PROPPATCH, LOCK, UNLOCK, HEAD";

/// Content type reported for collections.
pub const COLLECTION_CONTENT_TYPE: &str = "httpd/unix-directory";

/// Fallback content type when no MIME guess matches.
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Content type for multistatus and lock-discovery bodies.
pub const XML_CONTENT_TYPE: &str = "text/xml; charset=\"utf-8\"";
