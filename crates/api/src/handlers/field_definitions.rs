//! Handlers for the `/field-definitions` resource.
//!
//! Each request loads the catalog into a fresh [`FieldRegistry`], applies
//! one edit and writes the whole catalog back. Concurrent edits are last
//! write wins.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use brainstudio_core::form_fields::{FieldDefinition, FieldDefinitionInput, FieldRegistry};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/field-definitions
pub async fn list_definitions(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<FieldDefinition>>>> {
    let registry = FieldRegistry::load(state.store).await?;
    Ok(Json(DataResponse {
        data: registry.list().to_vec(),
    }))
}

/// PUT /api/v1/field-definitions
///
/// Replace the whole catalog. Rejects documents that repeat an id.
pub async fn replace_definitions(
    State(state): State<AppState>,
    Json(definitions): Json<Vec<FieldDefinition>>,
) -> AppResult<Json<DataResponse<Vec<FieldDefinition>>>> {
    let mut registry = FieldRegistry::new(state.store);
    registry.save_all(definitions).await?;
    Ok(Json(DataResponse {
        data: registry.list().to_vec(),
    }))
}

/// POST /api/v1/field-definitions
///
/// Create a definition with a fresh id. Returns 201 with the stored entry.
pub async fn create_definition(
    State(state): State<AppState>,
    Json(input): Json<FieldDefinitionInput>,
) -> AppResult<(StatusCode, Json<DataResponse<FieldDefinition>>)> {
    let mut registry = FieldRegistry::load(state.store).await?;
    let definition = registry.create(input)?;
    registry.save().await?;
    tracing::info!(id = %definition.id, field_key = %definition.key, "Created field definition");
    Ok((StatusCode::CREATED, Json(DataResponse { data: definition })))
}

/// PUT /api/v1/field-definitions/{id}
///
/// Processes that already bound this definition keep their copy.
pub async fn update_definition(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<FieldDefinitionInput>,
) -> AppResult<Json<DataResponse<FieldDefinition>>> {
    let mut registry = FieldRegistry::load(state.store).await?;
    let definition = registry.update(&id, input)?;
    registry.save().await?;
    Ok(Json(DataResponse { data: definition }))
}

/// DELETE /api/v1/field-definitions/{id}
///
/// Returns 204 on success, 404 if the id is unknown.
pub async fn delete_definition(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let mut registry = FieldRegistry::load(state.store).await?;
    let removed = registry.delete(&id)?;
    registry.save().await?;
    tracing::info!(id = %removed.id, field_key = %removed.key, "Deleted field definition");
    Ok(StatusCode::NO_CONTENT)
}
