//! URL path to resource path translation.

use kunai_core::error::CoreError;
use kunai_dav::dav::percent_decode;
use kunai_store::{ResourcePath, StoreError};

use crate::error::AppResult;

/// Depot keys for values shared between middleware and handlers.
pub mod depot_keys {
    /// The decoded resource path the request targets.
    pub const REQUEST_PATH: &str = "request_path";
}

/// ## Summary
/// Converts a URL path into the internal resource path: the mount prefix is
/// stripped, percent escapes are decoded, and surrounding slashes are
/// trimmed. The bare prefix without its trailing slash addresses the root.
///
/// The prefix must be in its normalized `/.../` form.
///
/// ## Errors
/// Returns an error if the URL path does not sit under the mount prefix.
pub fn url_to_path(prefix: &str, url_path: &str) -> AppResult<ResourcePath> {
    if prefix.strip_suffix('/') == Some(url_path) {
        return Ok(ResourcePath::root());
    }

    let Some(remainder) = url_path.strip_prefix(prefix) else {
        return Err(StoreError::InvalidPath(url_path.to_string()).into());
    };

    Ok(ResourcePath::new(percent_decode(remainder)))
}

/// ## Summary
/// Reads the resource path the path middleware stored for this request.
///
/// ## Errors
/// Returns an error if the path middleware did not run.
pub fn get_request_path_from_depot(depot: &salvo::Depot) -> AppResult<ResourcePath> {
    depot
        .get::<ResourcePath>(depot_keys::REQUEST_PATH)
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Request path not found in depot").into())
}
