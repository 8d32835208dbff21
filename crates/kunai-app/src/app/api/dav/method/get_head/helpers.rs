//! Helper functions for GET and HEAD request processing.

use salvo::http::{HeaderValue, StatusCode};
use salvo::{Depot, Response};

use kunai_store::Resource;

use crate::app::api::dav::response::fault::send_internal_error;
use crate::config::get_config_from_depot;
use crate::middleware::path_parser::get_request_path_from_depot;
use crate::store_handler::get_store_from_depot;

use super::listing::render_collection_listing;

/// ## Summary
/// Shared implementation for GET and HEAD handlers.
///
/// Loads the resource from the store, renders an index page for
/// collections or reads the blob for files, and sets the entity headers.
///
/// ## Parameters
/// - `is_head`: If true, the response body is omitted (HEAD request)
///
/// ## Side Effects
/// - Sets HTTP status code and headers on the response
/// - For GET requests, writes the response body
pub(super) async fn handle_get_or_head(res: &mut Response, is_head: bool, depot: &Depot) {
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

    if resource.is_collection {
        let children = match store.children(&resource.path).await {
            Ok(children) => children,
            Err(e) => {
                send_internal_error(res, depot, &e.into());
                return;
            }
        };

        let prefix = match get_config_from_depot(depot) {
            Ok(config) => config.dav.normalized_prefix(),
            Err(e) => {
                send_internal_error(res, depot, &e);
                return;
            }
        };

        let html = render_collection_listing(&prefix, &resource, &children);
        set_response_headers_and_body(
            res,
            &resource,
            "text/html; charset=utf-8",
            html.into_bytes(),
            is_head,
        );
    } else {
        let body = match store.read_blob(&resource).await {
            Ok(body) => body,
            Err(e) => {
                send_internal_error(res, depot, &e.into());
                return;
            }
        };

        set_response_headers_and_body(
            res,
            &resource,
            resource.content_type_or_default(),
            body,
            is_head,
        );
    }
}

/// ## Summary
/// Sets response headers and body for a successful GET/HEAD request.
///
/// ## Side Effects
/// Sets `ETag`, `Last-Modified`, `Content-Type` and `Content-Length`
/// headers and the response body (for GET).
fn set_response_headers_and_body(
    res: &mut Response,
    resource: &Resource,
    content_type: &str,
    body: Vec<u8>,
    is_head: bool,
) {
    // Collections carry no etag; skip the header for them.
    if let Some(etag) = resource.etag.as_deref()
        && let Ok(etag_value) = HeaderValue::from_str(etag)
    {
        #[expect(
            clippy::let_underscore_must_use,
            reason = "Header addition failure is non-fatal"
        )]
        let _ = res.add_header("ETag", etag_value, true);
    }

    let last_modified = resource
        .modified
        .format("%a, %d %b %Y %H:%M:%S GMT")
        .to_string();
    if let Ok(lm_value) = HeaderValue::from_str(&last_modified) {
        #[expect(
            clippy::let_underscore_must_use,
            reason = "Header addition failure is non-fatal"
        )]
        let _ = res.add_header("Last-Modified", lm_value, true);
    }

    if let Ok(ct_value) = HeaderValue::from_str(content_type) {
        #[expect(
            clippy::let_underscore_must_use,
            reason = "Header addition failure is non-fatal"
        )]
        let _ = res.add_header("Content-Type", ct_value, true);
    }

    // HEAD still reports the entity size it would have served.
    if let Ok(cl_value) = HeaderValue::from_str(&body.len().to_string()) {
        #[expect(
            clippy::let_underscore_must_use,
            reason = "Header addition failure is non-fatal"
        )]
        let _ = res.add_header("Content-Length", cl_value, true);
    }

    res.status_code(StatusCode::OK);

    // Set body only for GET (not HEAD)
    if !is_head && let Err(e) = res.write_body(body) {
        tracing::error!("Failed to write response body: {}", e);
    }
}
