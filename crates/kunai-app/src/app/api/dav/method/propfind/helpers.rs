//! Helper functions for PROPFIND request processing.

use salvo::{Depot, Request};

use kunai_dav::dav::{Depth, Href, Multistatus};
use kunai_store::{DavStore, Resource};

use crate::app::api::dav::response::propstat::export_propstat_response;
use crate::config::get_config_from_depot;
use crate::error::AppResult;

/// ## Summary
/// Builds the multistatus body for a PROPFIND.
///
/// The first response echoes the request path verbatim as its href. At
/// depth 1 each child of a collection follows, with an href built from the
/// mount prefix plus the child's encoded path.
///
/// ## Errors
/// Returns store errors and missing-configuration faults unchanged.
pub(super) async fn build_propfind_response(
    store: &DavStore,
    depot: &Depot,
    req: &Request,
    resource: &Resource,
    depth: Depth,
) -> AppResult<Multistatus> {
    let mut multistatus = Multistatus::new();

    // The requested resource answers under the href the client asked with.
    multistatus.add_response(export_propstat_response(
        resource,
        Href::new(req.uri().path()),
    ));

    if resource.is_collection && depth == Depth::One {
        let prefix = get_config_from_depot(depot)?.dav.normalized_prefix();

        for child in store.children(&resource.path).await? {
            let href = Href::from_path(&prefix, child.path.as_str());
            multistatus.add_response(export_propstat_response(&child, href));
        }
    }

    Ok(multistatus)
}
