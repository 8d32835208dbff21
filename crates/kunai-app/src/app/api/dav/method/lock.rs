//! LOCK and UNLOCK method handlers.
//!
//! Locking is not enforced; clients that insist on taking a lock before a
//! PUT get the success shape they expect and nothing is recorded.

use salvo::http::{HeaderValue, StatusCode};
use salvo::{Depot, Request, Response, handler};

use kunai_core::constants::XML_CONTENT_TYPE;
use kunai_dav::build::serialize_lock_discovery;

use crate::app::api::dav::response::fault::send_internal_error;

/// ## Summary
/// Handles LOCK requests by echoing a lock discovery document.
///
/// The Depth and Timeout headers are reflected back verbatim and the lock
/// token is a bare `opaquelocktoken:` URI.
///
/// ## Side Effects
/// Writes the lock discovery XML body.
///
/// ## Errors
/// Returns 500 when the document cannot be serialized.
#[handler]
#[tracing::instrument(skip_all, fields(method = "LOCK", path = %req.uri().path()))]
pub async fn lock(req: &mut Request, res: &mut Response, depot: &Depot) {
    tracing::info!("Handling LOCK request");

    // The raw header values are echoed, not interpreted.
    let depth = req
        .headers()
        .get("Depth")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("0");
    let timeout = req
        .headers()
        .get("Timeout")
        .and_then(|value| value.to_str().ok());

    let xml = match serialize_lock_discovery(depth, timeout) {
        Ok(xml) => xml,
        Err(e) => {
            send_internal_error(res, depot, &e.into());
            return;
        }
    };

    res.status_code(StatusCode::OK);
    #[expect(
        clippy::let_underscore_must_use,
        reason = "Header addition failure is non-fatal"
    )]
    let _ = res.add_header(
        "Content-Type",
        HeaderValue::from_static(XML_CONTENT_TYPE),
        true,
    );
    #[expect(
        clippy::let_underscore_must_use,
        reason = "Write body failure is non-fatal"
    )]
    let _ = res.write_body(xml);
}

/// ## Summary
/// Handles UNLOCK requests. There is no lock state to release, so the
/// request always succeeds with 204.
#[handler]
#[tracing::instrument(skip_all, fields(method = "UNLOCK", path = %req.uri().path()))]
pub async fn unlock(req: &mut Request, res: &mut Response) {
    tracing::info!("Handling UNLOCK request");

    res.status_code(StatusCode::NO_CONTENT);
}
