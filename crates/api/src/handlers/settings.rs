//! Handlers for console settings.

use axum::extract::State;
use axum::Json;
use brainstudio_core::settings::WorkflowFilters;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/settings/workflow-filters
pub async fn get_workflow_filters(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<WorkflowFilters>>> {
    let filters = state.store.load_workflow_filters().await?;
    Ok(Json(DataResponse { data: filters }))
}

/// PUT /api/v1/settings/workflow-filters
pub async fn put_workflow_filters(
    State(state): State<AppState>,
    Json(filters): Json<WorkflowFilters>,
) -> AppResult<Json<DataResponse<WorkflowFilters>>> {
    state.store.save_workflow_filters(&filters).await?;
    Ok(Json(DataResponse { data: filters }))
}
