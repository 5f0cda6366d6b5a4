use axum::routing::get;
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// Routes mounted at `/settings`.
///
/// ```text
/// GET    /workflow-filters   -> get_workflow_filters
/// PUT    /workflow-filters   -> put_workflow_filters
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/workflow-filters",
        get(settings::get_workflow_filters).put(settings::put_workflow_filters),
    )
}
