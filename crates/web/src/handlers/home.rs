//! Root redirect handler.

use axum::response::Redirect;

/// Handler for the root path.
///
/// Unconditionally redirects to the list view with no parameters, so the
/// list view applies all of its defaults.
///
/// # HTTP Request
///
/// `GET /`
pub async fn home_handler() -> Redirect {
    Redirect::to("/index")
}
