use base64::{Engine as _, engine::general_purpose::STANDARD};
use salvo::Depot;
use salvo::http::{HeaderValue, StatusCode};
use tracing::error;

use crate::config::get_config_from_depot;

/// ## Summary
/// Authentication middleware enforcing HTTP Basic credentials on every verb,
/// OPTIONS included. When no password is configured the tree is public and
/// requests pass through untouched.
///
/// ## Errors
/// Returns an HTTP 401 Unauthorized response with a `WWW-Authenticate`
/// challenge if credentials are missing or wrong.
#[salvo::async_trait]
impl salvo::Handler for AuthMiddleware {
    #[tracing::instrument(skip(self, req, depot, res, ctrl), fields(
        method = %req.method(),
        path = %req.uri().path()
    ))]
    async fn handle(
        &self,
        req: &mut salvo::Request,
        depot: &mut Depot,
        res: &mut salvo::Response,
        ctrl: &mut salvo::FlowCtrl,
    ) {
        tracing::trace!("Authenticating request");

        let config = match get_config_from_depot(depot) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!(error = ?e, "Failed to get config from depot");
                res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
                ctrl.skip_rest();
                return;
            }
        };

        let Some(expected_password) = config.auth.password.as_deref() else {
            // No password configured, the tree is public.
            return;
        };

        match credentials_from_header(req) {
            Some((username, password))
                if username == config.auth.username && password == expected_password =>
            {
                tracing::debug!(user = %username, "Request authenticated");
            }
            _ => {
                tracing::debug!("Missing or invalid credentials, requesting authentication");
                request_authentication(res, &config.auth.realm);
                ctrl.skip_rest();
            }
        }
    }
}

/// Extracts the `(username, password)` pair from an HTTP Basic header.
fn credentials_from_header(req: &salvo::Request) -> Option<(String, String)> {
    let header = req.headers().get("Authorization")?.to_str().ok()?;
    let (scheme, payload) = header.split_once(' ')?;

    if scheme != "Basic" {
        return None;
    }

    let decoded = STANDARD.decode(payload.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

/// Sends the 401 challenge.
fn request_authentication(res: &mut salvo::Response, realm: &str) {
    res.status_code(StatusCode::UNAUTHORIZED);

    if let Ok(value) = HeaderValue::from_str(&format!("Basic realm=\"{realm}\"")) {
        #[expect(
            clippy::let_underscore_must_use,
            reason = "Header addition failure is non-fatal"
        )]
        let _ = res.add_header("WWW-Authenticate", value, true);
    }
}

/// ## Summary
/// Middleware handler for authentication.
/// Use this as a handler in routes to protect them with authentication.
pub struct AuthMiddleware;
