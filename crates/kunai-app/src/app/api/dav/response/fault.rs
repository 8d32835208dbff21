//! Server fault responses.

use salvo::http::StatusCode;

use crate::app::api::dav::util::escape_html;
use crate::config::get_config_from_depot;
use crate::error::AppError;

/// ## Summary
/// Logs a server fault and sends a 500 response. The body is an opaque
/// fixed message unless `server.debug` is set, in which case it carries the
/// error text so a client can see what broke.
///
/// ## Side Effects
/// Sets the response status and writes the body.
pub fn send_internal_error(res: &mut salvo::Response, depot: &salvo::Depot, error: &AppError) {
    tracing::error!(error = %error, "Request failed with server fault");

    res.status_code(StatusCode::INTERNAL_SERVER_ERROR);

    let debug = get_config_from_depot(depot).is_ok_and(|settings| settings.server.debug);
    let body = if debug {
        format!("<pre>{}</pre>", escape_html(&error.to_string()))
    } else {
        "Internal Server Error".to_string()
    };

    #[expect(
        clippy::let_underscore_must_use,
        reason = "Write body failure is non-fatal"
    )]
    let _ = res.write_body(body);
}
