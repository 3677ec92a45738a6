//! Update handler for the edit-patient form.

use axum::Form;
use axum::extract::{Path, State};
use axum::response::Redirect;
use tracing::debug;
use ward_store::PatientStore;

use crate::error::WebResult;
use crate::extractors::ListQuery;
use crate::forms::PatientForm;
use crate::handlers::index_redirect;
use crate::state::AppState;

/// Handler for updating an existing patient.
///
/// The path identifier is authoritative: whatever identifier the form body
/// carried (mismatched or absent) is overwritten before persisting, so the
/// record named by the URL is the one replaced. Redirects back to the list
/// view with the caller's context intact.
///
/// # HTTP Request
///
/// `POST /patients/{id}?page=0&size=5&keyword=`
///
/// Body: `application/x-www-form-urlencoded` patient fields.
pub async fn update_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
    query: ListQuery,
    Form(form): Form<PatientForm>,
) -> WebResult<Redirect>
where
    S: PatientStore + Send + Sync,
{
    let patient = form.into_patient().with_id(id);
    state.store().save(patient).await?;

    debug!(id, "Patient updated");

    Ok(index_redirect(
        query.page(),
        Some(query.size()),
        query.keyword(),
    ))
}
