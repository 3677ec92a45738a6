//! Create handler for the add-patient form.

use axum::Form;
use axum::extract::State;
use axum::response::Redirect;
use tracing::debug;
use ward_store::PatientStore;

use crate::error::WebResult;
use crate::extractors::ListQuery;
use crate::flash::Flash;
use crate::forms::PatientForm;
use crate::handlers::index_redirect;
use crate::state::AppState;

/// Handler for saving a new patient.
///
/// Persists the submitted record (storage assigns the identifier), stores a
/// one-shot success notice, and redirects back to the list view with the
/// caller's `page`/`size`/`keyword` context intact.
///
/// # HTTP Request
///
/// `POST /patients/save?page=0&size=5&keyword=`
///
/// Body: `application/x-www-form-urlencoded` patient fields.
pub async fn save_handler<S>(
    State(state): State<AppState<S>>,
    query: ListQuery,
    Form(form): Form<PatientForm>,
) -> WebResult<Redirect>
where
    S: PatientStore + Send + Sync,
{
    let saved = state.store().save(form.into_patient()).await?;

    debug!(id = ?saved.id, name = %saved.name, "Patient saved");

    state.flash().set(Flash::new("Patient saved."));

    Ok(index_redirect(
        query.page(),
        Some(query.size()),
        query.keyword(),
    ))
}
