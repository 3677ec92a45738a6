//! Route configuration.
//!
//! Defines all routes for the patient flow.

use axum::Router;
use axum::routing::{get, post};
use ward_store::PatientStore;

use crate::handlers;
use crate::state::AppState;

/// Creates all routes for the patient flow.
///
/// # Routes
///
/// - `GET /` - Redirect to the list view
/// - `GET /index` - Paginated, keyword-filtered list view
/// - `POST /patients/save` - Create a patient
/// - `POST /patients/{id}` - Update a patient (path id is authoritative)
/// - `GET /delete` - Delete a patient
/// - `GET /health` - Health check
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: PatientStore + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(handlers::home_handler))
        .route("/index", get(handlers::list_handler::<S>))
        .route("/patients/save", post(handlers::save_handler::<S>))
        .route("/patients/{id}", post(handlers::update_handler::<S>))
        .route("/delete", get(handlers::delete_handler::<S>))
        .route("/health", get(handlers::health_handler::<S>))
        .with_state(state)
}
