//! GET and HEAD method handlers.

mod helpers;
mod listing;

use salvo::{Depot, Request, Response, handler};

/// ## Summary
/// Handles GET requests. Collections render an HTML index page; files
/// answer with their stored body.
#[handler]
#[tracing::instrument(skip_all, fields(method = "GET", path = %req.uri().path()))]
pub async fn get(req: &mut Request, res: &mut Response, depot: &Depot) {
    tracing::info!("Handling GET request");

    helpers::handle_get_or_head(res, false, depot).await;
}

/// ## Summary
/// Handles HEAD requests. Same status and headers as GET, no body; the
/// `Content-Length` header still reports the entity size.
#[handler]
#[tracing::instrument(skip_all, fields(method = "HEAD", path = %req.uri().path()))]
pub async fn head(req: &mut Request, res: &mut Response, depot: &Depot) {
    tracing::info!("Handling HEAD request");

    helpers::handle_get_or_head(res, true, depot).await;
}
