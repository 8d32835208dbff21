//! PROPFIND method handler.

mod helpers;

use salvo::http::StatusCode;
use salvo::{Depot, Request, Response, handler};

use kunai_core::constants::XML_CONTENT_TYPE;
use kunai_dav::build::serialize_multistatus;
use kunai_dav::dav::Depth;

use crate::app::api::dav::response::fault::send_internal_error;
use crate::middleware::path_parser::get_request_path_from_depot;
use crate::store_handler::get_store_from_depot;

use helpers::build_propfind_response;

/// ## Summary
/// Handles PROPFIND requests for resources in the tree.
///
/// The Depth header is checked before the resource is looked up, so an
/// unsupported depth is refused even for paths that do not exist. Depths
/// `0` and `1` are served; `infinity` and anything unrecognized get 403.
///
/// ## Side Effects
/// - Queries the store for the resource and, at depth 1, its children
/// - Returns a 207 Multi-Status XML response
///
/// ## Errors
/// Returns 403 for unsupported depths, 404 for missing resources, 500 for
/// store or serialization failures.
#[handler]
#[tracing::instrument(skip_all, fields(
    method = "PROPFIND",
    path = %req.uri().path()
))]
pub async fn propfind(req: &mut Request, res: &mut Response, depot: &Depot) {
    tracing::info!("Handling PROPFIND request");

    // A missing Depth header means depth 0.
    let depth = match req.headers().get("Depth") {
        None => Depth::default(),
        Some(value) => match value.to_str().ok().and_then(Depth::from_header) {
            Some(depth @ (Depth::Zero | Depth::One)) => depth,
            Some(Depth::Infinity) | None => {
                tracing::debug!(depth = ?value, "Refusing PROPFIND depth");
                res.status_code(StatusCode::FORBIDDEN);
                return;
            }
        },
    };
    tracing::debug!(depth = ?depth, "Depth header parsed");

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

    let multistatus = match build_propfind_response(&store, depot, req, &resource, depth).await {
        Ok(ms) => ms,
        Err(e) => {
            send_internal_error(res, depot, &e);
            return;
        }
    };

    tracing::debug!(
        responses = multistatus.len(),
        "Multistatus response built successfully"
    );

    let xml = match serialize_multistatus(&multistatus) {
        Ok(xml) => xml,
        Err(e) => {
            send_internal_error(res, depot, &e.into());
            return;
        }
    };

    res.status_code(StatusCode::MULTI_STATUS);
    #[expect(
        clippy::let_underscore_must_use,
        reason = "Header addition failure is non-fatal"
    )]
    let _ = res.add_header(
        "Content-Type",
        salvo::http::HeaderValue::from_static(XML_CONTENT_TYPE),
        true,
    );
    #[expect(
        clippy::let_underscore_must_use,
        reason = "Write body failure is non-fatal"
    )]
    let _ = res.write_body(xml);
}
