//! Middleware resolving the request URL to a resource path.
//!
//! ## Summary
//! Strips the configured mount prefix from the request path, percent-decodes
//! the remainder, and stores the resulting resource path in the depot for
//! the method handlers.

use salvo::Depot;
use salvo::http::StatusCode;

use crate::config::get_config_from_depot;
use crate::middleware::path_parser::{depot_keys, url_to_path};

/// Middleware handler for request path resolution.
///
/// Depot keys populated:
/// - `REQUEST_PATH`: decoded resource path relative to the served root
pub struct DavPathMiddleware;

#[salvo::async_trait]
impl salvo::Handler for DavPathMiddleware {
    #[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
    async fn handle(
        &self,
        req: &mut salvo::Request,
        depot: &mut Depot,
        res: &mut salvo::Response,
        ctrl: &mut salvo::FlowCtrl,
    ) {
        let config = match get_config_from_depot(depot) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::error!(error = ?e, "Failed to get config from depot");
                res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
                ctrl.skip_rest();
                return;
            }
        };

        let prefix = config.dav.normalized_prefix();
        // Routing already confined the request to the prefix subtree.
        let path = match url_to_path(&prefix, req.uri().path()) {
            Ok(path) => path,
            Err(e) => {
                tracing::error!(error = ?e, "Request path outside the mount prefix");
                res.status_code(StatusCode::BAD_REQUEST);
                ctrl.skip_rest();
                return;
            }
        };

        tracing::debug!(resource_path = %path, "Resolved request path");
        depot.insert(depot_keys::REQUEST_PATH, path);
    }
}
