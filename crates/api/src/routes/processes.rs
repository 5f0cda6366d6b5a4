//! Route definitions for the `/processes` resource and its form.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::processes;
use crate::state::AppState;

/// Routes mounted at `/processes`.
///
/// ```text
/// GET    /                              -> list_processes (?search)
/// GET    /{id}                          -> get_process
/// PUT    /{id}/form-configuration       -> put_form_configuration
/// GET    /{id}/form                     -> get_form
/// POST   /{id}/form/fields              -> add_form_field
/// DELETE /{id}/form/fields/{field_id}   -> remove_form_field
/// POST   /{id}/form/order               -> move_form_field
/// POST   /{id}/form/submit              -> submit_form
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(processes::list_processes))
        .route("/{id}", get(processes::get_process))
        .route(
            "/{id}/form-configuration",
            put(processes::put_form_configuration),
        )
        .route("/{id}/form", get(processes::get_form))
        .route("/{id}/form/fields", post(processes::add_form_field))
        .route(
            "/{id}/form/fields/{field_id}",
            delete(processes::remove_form_field),
        )
        .route("/{id}/form/order", post(processes::move_form_field))
        .route("/{id}/form/submit", post(processes::submit_form))
}
