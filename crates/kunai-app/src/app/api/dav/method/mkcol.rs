//! MKCOL method handler.

use salvo::http::StatusCode;
use salvo::{Depot, Request, Response, handler};

use kunai_store::Resource;

use crate::app::api::dav::response::fault::send_internal_error;
use crate::middleware::path_parser::get_request_path_from_depot;
use crate::store_handler::get_store_from_depot;

/// ## Summary
/// Handles MKCOL requests to create a collection.
///
/// The path must be free and the parent must exist. Only the parent's
/// existence is checked, not whether it is itself a collection.
///
/// ## Side Effects
/// - Inserts the collection record into the store
///
/// ## Errors
/// Returns 405 when something already lives at the path, 409 when the
/// parent is missing, 500 for store failures.
#[handler]
#[tracing::instrument(skip_all, fields(method = "MKCOL", path = %req.uri().path()))]
pub async fn mkcol(req: &mut Request, res: &mut Response, depot: &Depot) {
    tracing::info!("Handling MKCOL request");

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

    match store.exists_with_path(&path, false).await {
        Ok(true) => {
            tracing::debug!(path = %path, "Path already taken");
            res.status_code(StatusCode::METHOD_NOT_ALLOWED);
            return;
        }
        Ok(false) => {}
        Err(e) => {
            send_internal_error(res, depot, &e.into());
            return;
        }
    }

    // The served root has no parent and cannot be created again.
    let Some(parent_path) = path.parent() else {
        res.status_code(StatusCode::METHOD_NOT_ALLOWED);
        return;
    };

    if parent_path.is_root() {
        // Top-level collections hang off the root, which is made on demand.
        if let Err(e) = store.root().await {
            send_internal_error(res, depot, &e.into());
            return;
        }
    } else {
        match store.exists_with_path(&parent_path, false).await {
            Ok(true) => {}
            Ok(false) => {
                tracing::debug!(path = %path, "Parent missing for MKCOL");
                res.status_code(StatusCode::CONFLICT);
                return;
            }
            Err(e) => {
                send_internal_error(res, depot, &e.into());
                return;
            }
        }
    }

    tracing::info!(path = %path, "Creating collection");

    let collection = Resource::new_collection(path, Some(parent_path));
    if let Err(e) = store.save(collection).await {
        send_internal_error(res, depot, &e.into());
        return;
    }

    res.status_code(StatusCode::CREATED);
}
