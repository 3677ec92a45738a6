//! Delete handler.

use axum::extract::{Query, State};
use axum::response::Redirect;
use serde::Deserialize;
use tracing::debug;
use ward_store::PatientStore;

use crate::error::WebResult;
use crate::handlers::index_redirect;
use crate::state::AppState;

/// Query parameters for the delete operation.
#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    /// Identifier of the record to remove.
    pub id: i64,

    /// Current search keyword, echoed into the redirect.
    #[serde(default)]
    pub keyword: String,

    /// Current page number, echoed into the redirect.
    #[serde(default)]
    pub page: u32,

    /// Current page size. Optional on this path: carried into the redirect
    /// only when supplied, otherwise the list view falls back to its
    /// default.
    pub size: Option<u32>,
}

/// Handler for deleting a patient.
///
/// Removes the record (a no-op when the identifier is unknown) and
/// redirects back to the list view with `page` and `keyword`, plus `size`
/// when it was supplied.
///
/// # HTTP Request
///
/// `GET /delete?id=1&keyword=&page=0`
pub async fn delete_handler<S>(
    State(state): State<AppState<S>>,
    Query(query): Query<DeleteQuery>,
) -> WebResult<Redirect>
where
    S: PatientStore + Send + Sync,
{
    state.store().delete_by_id(query.id).await?;

    debug!(id = query.id, "Patient deleted");

    Ok(index_redirect(query.page, query.size, &query.keyword))
}
