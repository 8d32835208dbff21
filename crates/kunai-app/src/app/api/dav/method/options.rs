//! OPTIONS method handler.

use salvo::http::HeaderValue;
use salvo::{Request, Response, handler};

use kunai_core::constants::{ALLOWED_METHODS, COLLECTION_CONTENT_TYPE};

/// ## Summary
/// Handles OPTIONS requests by advertising the supported verb set.
///
/// The `DAV` compliance header itself is set for every request by the
/// header middleware; this handler only adds the `Allow` list and the
/// directory content type clients probe for.
///
/// ## Side Effects
/// Sets the `Allow` and `Content-Type` headers on the response.
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
pub async fn options(req: &mut Request, res: &mut Response) {
    tracing::info!("Handling OPTIONS request");

    #[expect(
        clippy::let_underscore_must_use,
        reason = "Header addition failure is non-fatal"
    )]
    let _ = res.add_header("Allow", HeaderValue::from_static(ALLOWED_METHODS), true);
    #[expect(
        clippy::let_underscore_must_use,
        reason = "Header addition failure is non-fatal"
    )]
    let _ = res.add_header(
        "Content-Type",
        HeaderValue::from_static(COLLECTION_CONTENT_TYPE),
        true,
    );
    res.status_code(salvo::http::StatusCode::OK);

    tracing::debug!("OPTIONS response sent");
}
