pub mod field_definitions;
pub mod health;
pub mod processes;
pub mod settings;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /field-definitions                      list, replace all, create
/// /field-definitions/{id}                 update, delete
///
/// /processes                              list (?search)
/// /processes/{id}                         get
/// /processes/{id}/form-configuration      store configuration (PUT)
/// /processes/{id}/form                    rendered form view
/// /processes/{id}/form/fields             bind a definition (POST)
/// /processes/{id}/form/fields/{field_id}  unbind (DELETE)
/// /processes/{id}/form/order              move a field (POST)
/// /processes/{id}/form/submit             validate and save values (POST)
///
/// /settings/workflow-filters              get, replace
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/field-definitions", field_definitions::router())
        .nest("/processes", processes::router())
        .nest("/settings", settings::router())
}
