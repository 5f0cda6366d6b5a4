//! Handlers for the `/processes` resource and the per-process form.
//!
//! Form endpoints open a [`FormSession`] per request: the registry's
//! current catalog is snapshotted, one edit is applied, and the structure
//! or values are saved before the response is rendered.

use axum::extract::{Path, Query, State};
use axum::Json;
use brainstudio_core::error::CoreError;
use brainstudio_core::form_fields::render::Control;
use brainstudio_core::form_fields::session::{OperatorMessage, SubmitOutcome, SAVE_FAILED_MESSAGE};
use brainstudio_core::form_fields::{
    FieldDefinition, FieldErrors, FieldRegistry, FormSession, FormValues,
    ProcessFormConfiguration,
};
use brainstudio_core::process::Process;
use brainstudio_core::types::DbId;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ── Process records ──────────────────────────────────────────────────

/// A process as returned to the console, with its status badge text.
#[derive(Debug, Serialize)]
pub struct ProcessView {
    #[serde(flatten)]
    pub process: Process,
    pub status_label: &'static str,
}

impl From<Process> for ProcessView {
    fn from(process: Process) -> Self {
        let status_label = process.status.label();
        Self {
            process,
            status_label,
        }
    }
}

/// Query parameters for listing processes.
#[derive(Debug, Deserialize)]
pub struct ListProcessesParams {
    pub search: Option<String>,
}

/// GET /api/v1/processes?search=term
///
/// Case-insensitive substring search over name, description and category.
pub async fn list_processes(
    State(state): State<AppState>,
    Query(params): Query<ListProcessesParams>,
) -> AppResult<Json<DataResponse<Vec<ProcessView>>>> {
    let processes = state.store.list_processes(params.search.as_deref()).await?;
    Ok(Json(DataResponse {
        data: processes.into_iter().map(ProcessView::from).collect(),
    }))
}

/// GET /api/v1/processes/{id}
pub async fn get_process(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ProcessView>>> {
    let process = state
        .store
        .find_process(id)
        .await?
        .ok_or_else(|| CoreError::not_found("Process", id))?;
    Ok(Json(DataResponse {
        data: process.into(),
    }))
}

/// PUT /api/v1/processes/{id}/form-configuration
///
/// Store a whole `{fields, values}` document as-is.
pub async fn put_form_configuration(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(configuration): Json<ProcessFormConfiguration>,
) -> AppResult<Json<DataResponse<ProcessView>>> {
    let process = state
        .store
        .save_form_configuration(id, &configuration)
        .await?;
    tracing::info!(
        process_id = id,
        field_count = configuration.fields.len(),
        "Stored form configuration",
    );
    Ok(Json(DataResponse {
        data: process.into(),
    }))
}

// ── Form view ────────────────────────────────────────────────────────

/// Everything the form page needs to draw one process's form.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    pub process: ProcessView,
    pub controls: Vec<Control>,
    /// Catalog entries that can still be bound.
    pub available_definitions: Vec<FieldDefinition>,
    pub errors: FieldErrors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<OperatorMessage>,
}

impl FormView {
    fn from_session(session: &FormSession) -> Self {
        let binder = session.binder();
        Self {
            process: binder.process().clone().into(),
            controls: session.controls(),
            available_definitions: binder.available_definitions().cloned().collect(),
            errors: session.errors().clone(),
            message: session.message().cloned(),
        }
    }
}

async fn open_session(state: &AppState, id: DbId) -> AppResult<FormSession> {
    let registry = FieldRegistry::load(state.store.clone()).await?;
    Ok(FormSession::open(&registry, id).await?)
}

/// Save the bound field structure and render the result.
async fn save_structure(mut session: FormSession) -> AppResult<Json<DataResponse<FormView>>> {
    match session.save_structure().await {
        SubmitOutcome::Failed => {
            Err(CoreError::Persistence(SAVE_FAILED_MESSAGE.to_string()).into())
        }
        _ => Ok(Json(DataResponse {
            data: FormView::from_session(&session),
        })),
    }
}

/// GET /api/v1/processes/{id}/form
pub async fn get_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<FormView>>> {
    let session = open_session(&state, id).await?;
    Ok(Json(DataResponse {
        data: FormView::from_session(&session),
    }))
}

/// Request body for binding a catalog definition.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFieldRequest {
    pub definition_id: String,
}

/// POST /api/v1/processes/{id}/form/fields
///
/// Append a copy of the definition. Binding an already bound id changes
/// nothing; an id missing from the catalog is 404.
pub async fn add_form_field(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<AddFieldRequest>,
) -> AppResult<Json<DataResponse<FormView>>> {
    let registry = FieldRegistry::load(state.store.clone()).await?;
    if registry.get(&input.definition_id).is_none() {
        return Err(CoreError::not_found("FieldDefinition", &input.definition_id).into());
    }
    let mut session = FormSession::open(&registry, id).await?;

    if !session.binder_mut().add_field(&input.definition_id) {
        return Ok(Json(DataResponse {
            data: FormView::from_session(&session),
        }));
    }
    save_structure(session).await
}

/// DELETE /api/v1/processes/{id}/form/fields/{field_id}
///
/// Unbind the field. Its stored value is kept.
pub async fn remove_form_field(
    State(state): State<AppState>,
    Path((id, field_id)): Path<(DbId, String)>,
) -> AppResult<Json<DataResponse<FormView>>> {
    let mut session = open_session(&state, id).await?;
    if !session.binder_mut().remove_field(&field_id) {
        return Err(CoreError::not_found("Field", field_id).into());
    }
    save_structure(session).await
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    Up,
    Down,
}

/// Request body for reordering a bound field.
#[derive(Debug, Deserialize)]
pub struct MoveFieldRequest {
    pub index: usize,
    pub direction: MoveDirection,
}

/// POST /api/v1/processes/{id}/form/order
///
/// Swap the field at `index` with its neighbour. Moving past either end
/// is a no-op.
pub async fn move_form_field(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<MoveFieldRequest>,
) -> AppResult<Json<DataResponse<FormView>>> {
    let mut session = open_session(&state, id).await?;
    let binder = session.binder_mut();
    let moved = match input.direction {
        MoveDirection::Up => binder.move_up(input.index),
        MoveDirection::Down => binder.move_down(input.index),
    };

    if !moved {
        return Ok(Json(DataResponse {
            data: FormView::from_session(&session),
        }));
    }
    save_structure(session).await
}

/// Request body for submitting form values.
#[derive(Debug, Default, Deserialize)]
pub struct SubmitFormRequest {
    #[serde(default)]
    pub values: FormValues,
}

/// POST /api/v1/processes/{id}/form/submit
///
/// Merge `values` into the stored ones, validate every bound field, and
/// save when valid. Invalid values answer 422 and nothing is stored.
pub async fn submit_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SubmitFormRequest>,
) -> AppResult<Json<DataResponse<FormView>>> {
    let mut session = open_session(&state, id).await?;
    for (key, value) in input.values {
        session.on_change(&key, value);
    }

    match session.submit().await {
        SubmitOutcome::Saved => Ok(Json(DataResponse {
            data: FormView::from_session(&session),
        })),
        SubmitOutcome::Invalid(errors) => Err(AppError::InvalidForm(errors)),
        SubmitOutcome::Failed => {
            Err(CoreError::Persistence(SAVE_FAILED_MESSAGE.to_string()).into())
        }
    }
}
