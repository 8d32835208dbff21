// Method routing for the WebDAV tree.
//
// Verbs salvo has builder methods for use them; the DAV-specific verbs are
// routed with method filters.

use salvo::Router;

pub mod method;
pub mod response;
pub mod util;

#[must_use]
pub fn routes() -> Router {
    Router::new()
        .options(method::options::options)
        .get(method::get_head::get)
        .head(method::get_head::head)
        .put(method::put::put)
        .delete(method::delete::delete)
        .push(
            // PROPFIND method
            Router::new()
                .filter_fn(|req, _| req.method().as_str() == "PROPFIND")
                .goal(method::propfind::propfind),
        )
        .push(
            // MKCOL method
            Router::new()
                .filter_fn(|req, _| req.method().as_str() == "MKCOL")
                .goal(method::mkcol::mkcol),
        )
        .push(
            // MOVE method
            Router::new()
                .filter_fn(|req, _| req.method().as_str() == "MOVE")
                .goal(method::r#move::r#move),
        )
        .push(
            // LOCK method
            Router::new()
                .filter_fn(|req, _| req.method().as_str() == "LOCK")
                .goal(method::lock::lock),
        )
        .push(
            // UNLOCK method
            Router::new()
                .filter_fn(|req, _| req.method().as_str() == "UNLOCK")
                .goal(method::lock::unlock),
        )
}
