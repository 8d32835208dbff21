pub mod dav;

use salvo::Router;

use crate::config::Settings;
use crate::middleware::auth::AuthMiddleware;
use crate::middleware::dav_headers::DavHeadersMiddleware;
use crate::middleware::dav_path_middleware::DavPathMiddleware;

/// ## Summary
/// Constructs the main router. Compliance headers and authentication wrap
/// the whole tree; inside it, every request path is resolved to a resource
/// path before the method handlers run.
///
/// The tree mounts at `/` unless a prefix is configured, in which case it
/// mounts under that component and paths outside it are not served.
#[must_use]
pub fn routes(settings: &Settings) -> Router {
    let dav_routes = Router::with_path("{**rest}")
        .hoop(DavPathMiddleware)
        .push(dav::routes());

    let root = Router::new().hoop(DavHeadersMiddleware).hoop(AuthMiddleware);

    match settings.dav.route_component() {
        Some(component) => root.push(Router::with_path(component).push(dav_routes)),
        None => root.push(dav_routes),
    }
}
