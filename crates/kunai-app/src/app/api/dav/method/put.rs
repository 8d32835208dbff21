//! PUT method handler.

use salvo::http::StatusCode;
use salvo::{Depot, Request, Response, handler};

use crate::app::api::dav::response::fault::send_internal_error;
use crate::middleware::path_parser::get_request_path_from_depot;
use crate::store_handler::get_store_from_depot;

/// ## Summary
/// Handles PUT requests to store a file.
///
/// A put is a full replace: whatever already lives at the path is deleted
/// first, subtree included. The parent must exist and be a collection.
/// The body is stored verbatim and hashed for the etag.
///
/// ## Side Effects
/// - Recursively deletes any resource already at the path
/// - Writes the request body and the file record to the store
///
/// ## Errors
/// Returns 400 when the body cannot be read, 409 when the parent is missing
/// or not a collection, 500 for store failures.
#[handler]
#[tracing::instrument(skip_all, fields(method = "PUT", path = %req.uri().path()))]
pub async fn put(req: &mut Request, res: &mut Response, depot: &Depot) {
    tracing::info!("Handling PUT request");

    let store = match get_store_from_depot(depot) {
        Ok(store) => store,
        Err(e) => {
            send_internal_error(res, depot, &e);
            return;
        }
    };

    let path = match get_request_path_from_depot(depot) {
        Ok(path) => path,
        Err(e) => {
            send_internal_error(res, depot, &e);
            return;
        }
    };

    // A file cannot stand in for the served root.
    let Some(parent_path) = path.parent() else {
        res.status_code(StatusCode::CONFLICT);
        return;
    };

    let body = match req.payload().await {
        Ok(bytes) => bytes.to_vec(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to read request body");
            res.status_code(StatusCode::BAD_REQUEST);
            return;
        }
    };

    tracing::debug!(bytes = body.len(), "Request body read successfully");

    // Clear the path before the parent check; the original resource is
    // gone even when the put then fails on a missing parent.
    match store.get_by_path(&path).await {
        Ok(Some(existing)) => {
            if let Err(e) = store.delete_recursive(&existing.path).await {
                send_internal_error(res, depot, &e.into());
                return;
            }
        }
        Ok(None) => {}
        Err(e) => {
            send_internal_error(res, depot, &e.into());
            return;
        }
    }

    let parent_exists = if parent_path.is_root() {
        match store.root().await {
            Ok(_) => true,
            Err(e) => {
                send_internal_error(res, depot, &e.into());
                return;
            }
        }
    } else {
        match store.exists_with_path(&parent_path, true).await {
            Ok(exists) => exists,
            Err(e) => {
                send_internal_error(res, depot, &e.into());
                return;
            }
        }
    };

    if !parent_exists {
        tracing::debug!(path = %path, "Parent collection missing for PUT");
        res.status_code(StatusCode::CONFLICT);
        return;
    }

    tracing::info!(path = %path, size = body.len(), "Storing file");

    match store.create_file(path, body).await {
        Ok(_resource) => {
            res.status_code(StatusCode::CREATED);
        }
        Err(e) => send_internal_error(res, depot, &e.into()),
    }
}
