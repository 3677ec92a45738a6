//! HTTP request handlers for the patient flow.
//!
//! This module contains one handler per operation:
//!
//! - [`home`] - Redirect the root to the list view
//! - [`list`] - Paginated, keyword-filtered list view
//! - [`save`] - Create a patient from the add form
//! - [`update`] - Overwrite a patient from the edit form
//! - [`delete`] - Remove a patient
//! - [`health`] - Health check endpoint

pub mod delete;
pub mod health;
pub mod home;
pub mod list;
pub mod save;
pub mod update;

// Re-export handlers for convenience
pub use delete::delete_handler;
pub use health::health_handler;
pub use home::home_handler;
pub use list::list_handler;
pub use save::save_handler;
pub use update::update_handler;

use axum::response::Redirect;

use crate::views::list_query;

/// Builds the redirect back to the list view with the given context.
///
/// The mutating handlers all return here so the user lands on the same
/// list state (page window and keyword filter) they acted from.
pub(crate) fn index_redirect(page: u32, size: Option<u32>, keyword: &str) -> Redirect {
    let query = match size {
        Some(size) => list_query(page, size, keyword),
        None => url::form_urlencoded::Serializer::new(String::new())
            .append_pair("page", &page.to_string())
            .append_pair("keyword", keyword)
            .finish(),
    };
    Redirect::to(&format!("/index?{query}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    fn location_of(redirect: Redirect) -> String {
        let response = redirect.into_response();
        response
            .headers()
            .get("location")
            .unwrap()
            .to_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_index_redirect_with_size() {
        let location = location_of(index_redirect(1, Some(5), "du"));
        assert_eq!(location, "/index?page=1&size=5&keyword=du");
    }

    #[test]
    fn test_index_redirect_without_size() {
        let location = location_of(index_redirect(2, None, "du"));
        assert_eq!(location, "/index?page=2&keyword=du");
    }

    #[test]
    fn test_index_redirect_encodes_keyword() {
        let location = location_of(index_redirect(0, Some(5), "a b"));
        assert_eq!(location, "/index?page=0&size=5&keyword=a+b");
    }
}
