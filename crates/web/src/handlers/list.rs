//! List view handler.

use axum::extract::State;
use axum::response::Html;
use tracing::debug;
use ward_store::{PageRequest, Patient, PatientStore};

use crate::error::WebResult;
use crate::extractors::ListQuery;
use crate::state::AppState;
use crate::views::{ListViewData, render_list};

/// Handler for the list view.
///
/// Runs the keyword-paginated search and renders the result page together
/// with the pager totals, the echoed list context, an empty template record
/// for the add form, and the pending one-shot notice (if any).
///
/// # HTTP Request
///
/// `GET /index?page=0&size=5&keyword=`
///
/// All parameters are optional; the defaults above apply. The page size is
/// capped by the configured maximum.
pub async fn list_handler<S>(
    State(state): State<AppState<S>>,
    query: ListQuery,
) -> WebResult<Html<String>>
where
    S: PatientStore + Send + Sync,
{
    let size = query.size().min(state.max_page_size());
    let request = PageRequest::new(query.page(), size);

    let page = state
        .store()
        .find_by_name_contains(query.keyword(), &request)
        .await?;

    debug!(
        keyword = query.keyword(),
        page = query.page(),
        size,
        total = page.total,
        "Rendering patient list"
    );

    let pages = page.total_pages();
    let data = ListViewData {
        patients: page.items,
        pages,
        current_page: query.page(),
        page_size: size,
        keyword: query.keyword().to_string(),
        new_patient: Patient::default(),
        notice: state.flash().take(),
    };

    Ok(Html(render_list(&data)))
}
