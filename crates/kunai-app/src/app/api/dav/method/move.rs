//! MOVE method handler for resource relocation.

#![expect(clippy::single_match_else)]

use salvo::http::StatusCode;
use salvo::http::uri::Uri;
use salvo::{Depot, Request, Response, handler};

use crate::app::api::dav::response::fault::send_internal_error;
use crate::config::get_config_from_depot;
use crate::middleware::path_parser::{get_request_path_from_depot, url_to_path};
use crate::store_handler::get_store_from_depot;

/// ## Summary
/// Handles MOVE requests to relocate a resource.
///
/// Reads the Destination header, clears the destination when Overwrite
/// permits, and renames the source subtree in one atomic step.
///
/// ## Side Effects
/// - Recursively deletes the destination when overwriting
/// - Rewrites the paths of the moved subtree
/// - Returns 201 Created or 204 No Content
///
/// ## Errors
/// Returns 400 for a missing or malformed Destination, 404 for a missing
/// source, 403 when source and destination coincide, 412 when the
/// destination exists and Overwrite is not `T`, 409 when the destination's
/// parent is missing or not a collection.
#[handler]
pub async fn r#move(req: &mut Request, res: &mut Response, depot: &Depot) {
    tracing::info!(path = %req.uri().path(), "Handling MOVE request");

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

    let resource = match store.get_by_path(&path).await {
        Ok(Some(resource)) => resource,
        Ok(None) => {
            tracing::debug!(path = %path, "Resource not found");
            res.status_code(StatusCode::NOT_FOUND);
            return;
        }
        Err(e) => {
            send_internal_error(res, depot, &e.into());
            return;
        }
    };

    // Get Overwrite header (default: T)
    let overwrite = match req.headers().get("Overwrite") {
        Some(header) => header.to_str().unwrap_or("T") == "T",
        None => true,
    };

    // Get Destination header
    let destination = match req.headers().get("Destination") {
        Some(dest_header) => match dest_header.to_str() {
            Ok(dest) => dest.to_string(),
            Err(e) => {
                tracing::error!("Invalid Destination header: {}", e);
                res.status_code(StatusCode::BAD_REQUEST);
                return;
            }
        },
        None => {
            tracing::error!("Missing Destination header for MOVE");
            res.status_code(StatusCode::BAD_REQUEST);
            return;
        }
    };

    let config = match get_config_from_depot(depot) {
        Ok(config) => config,
        Err(e) => {
            send_internal_error(res, depot, &e);
            return;
        }
    };

    // The Destination header carries a full URL; only its path matters, and
    // that path must sit under the mount prefix.
    let destination_uri = match destination.parse::<Uri>() {
        Ok(uri) => uri,
        Err(e) => {
            tracing::error!(error = %e, destination = %destination, "Unparseable Destination header");
            res.status_code(StatusCode::BAD_REQUEST);
            return;
        }
    };

    let prefix = config.dav.normalized_prefix();
    let destination_path = match url_to_path(&prefix, destination_uri.path()) {
        Ok(path) => path,
        Err(e) => {
            tracing::error!(error = %e, destination = %destination, "Destination outside the served tree");
            res.status_code(StatusCode::BAD_REQUEST);
            return;
        }
    };

    if path == destination_path {
        tracing::debug!(path = %path, "Refusing move onto itself");
        res.status_code(StatusCode::FORBIDDEN);
        return;
    }

    // Anything at the destination already?
    let existing = match store.get_by_path(&destination_path).await {
        Ok(existing) => existing,
        Err(e) => {
            send_internal_error(res, depot, &e.into());
            return;
        }
    };

    let replaced = existing.is_some();
    if let Some(existing) = existing {
        if overwrite {
            if let Err(e) = store.delete_recursive(&existing.path).await {
                send_internal_error(res, depot, &e.into());
                return;
            }
        } else {
            res.status_code(StatusCode::PRECONDITION_FAILED);
            return;
        }
    }

    // The destination must slot under an existing collection.
    let parent_ok = match destination_path.parent() {
        Some(parent) if parent.is_root() => match store.root().await {
            Ok(_) => true,
            Err(e) => {
                send_internal_error(res, depot, &e.into());
                return;
            }
        },
        Some(parent) => match store.exists_with_path(&parent, true).await {
            Ok(exists) => exists,
            Err(e) => {
                send_internal_error(res, depot, &e.into());
                return;
            }
        },
        None => true,
    };

    if !parent_ok {
        tracing::debug!(destination = %destination_path, "Destination parent missing for MOVE");
        res.status_code(StatusCode::CONFLICT);
        return;
    }

    tracing::info!(path = %path, destination = %destination_path, "Moving resource");

    if let Err(e) = store.move_to_path(&resource.path, &destination_path).await {
        send_internal_error(res, depot, &e.into());
        return;
    }

    res.status_code(if replaced {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::CREATED
    });
}
