//! Compliance headers attached to every response.

use salvo::http::HeaderValue;

use kunai_core::constants::{DAV_COMPLIANCE, MS_AUTHOR_VIA};

/// ## Summary
/// Sets the `DAV` and `MS-Author-Via` headers before any handler runs, so
/// they appear on every response including authentication failures. Several
/// clients refuse to talk to a server that omits them.
pub struct DavHeadersMiddleware;

#[salvo::async_trait]
impl salvo::Handler for DavHeadersMiddleware {
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        _depot: &mut salvo::Depot,
        res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        #[expect(
            clippy::let_underscore_must_use,
            reason = "Header addition failure is non-fatal"
        )]
        let _ = res.add_header("DAV", HeaderValue::from_static(DAV_COMPLIANCE), true);
        #[expect(
            clippy::let_underscore_must_use,
            reason = "Header addition failure is non-fatal"
        )]
        let _ = res.add_header("MS-Author-Via", HeaderValue::from_static(MS_AUTHOR_VIA), true);
    }
}
