//! DELETE method handler.

use salvo::http::StatusCode;
use salvo::{Depot, Request, Response, handler};

use crate::app::api::dav::response::fault::send_internal_error;
use crate::middleware::path_parser::get_request_path_from_depot;
use crate::store_handler::get_store_from_depot;

/// ## Summary
/// Handles DELETE requests.
///
/// Collections are removed together with every descendant and all stored
/// file bodies under them.
///
/// ## Side Effects
/// - Removes the resource subtree and its blobs from the store
///
/// ## Errors
/// Returns 404 when nothing lives at the path, 500 for store failures.
#[handler]
#[tracing::instrument(skip_all, fields(method = "DELETE", path = %req.uri().path()))]
pub async fn delete(req: &mut Request, res: &mut Response, depot: &Depot) {
    tracing::info!("Handling DELETE request");

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

    match store.get_by_path(&path).await {
        Ok(Some(resource)) => {
            tracing::info!(path = %path, "Deleting resource");
            if let Err(e) = store.delete_recursive(&resource.path).await {
                send_internal_error(res, depot, &e.into());
                return;
            }
            res.status_code(StatusCode::NO_CONTENT);
        }
        Ok(None) => {
            tracing::debug!(path = %path, "Resource not found");
            res.status_code(StatusCode::NOT_FOUND);
        }
        Err(e) => send_internal_error(res, depot, &e.into()),
    }
}
